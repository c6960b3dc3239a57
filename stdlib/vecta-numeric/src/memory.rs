//! Loading vectors from memory and storing them back.
//!
//! # Contracts
//!
//! | Operation | Null pointer | Alignment | Bounds |
//! |-----------|--------------|-----------|--------|
//! | `load`, `store` | error | none | caller |
//! | `load_aligned`, `store_aligned` | error | caller, to `byte_width()` | caller |
//! | `*_non_temporal` | error | caller, to `byte_width()` | caller |
//! | `load_unsafe`, `store_unsafe` | impossible (slice) | none | caller |
//! | `copy_to*`, `try_copy_to*` | impossible (slice) | none | checked |
//!
//! Alignment is never validated. The non-temporal forms are a cache hint;
//! where the hardware cannot honor it they behave like the aligned forms.
//!
//! Buffers from `vecta_alloc::AlignedBuffer::for_vectors` satisfy the
//! aligned contracts.

use tracing::trace;

use crate::accel;
use crate::element::Element;
use crate::error::{VectorError, VectorResult};
use crate::storage::LaneBlock;
use crate::vector::Vector;

impl<T: Element> Vector<T> {
    /// Load from a possibly unaligned pointer.
    ///
    /// # Errors
    ///
    /// [`VectorError::NullSource`] if `source` is null.
    ///
    /// # Safety
    ///
    /// `source` must be valid for reads of [`Vector::count`] elements.
    pub unsafe fn load(source: *const T) -> VectorResult<Self> {
        if source.is_null() {
            trace!("load from null pointer");
            return Err(VectorError::NullSource);
        }
        let mut block = LaneBlock::ZERO;
        // Safety: the caller guarantees source is valid for width bytes.
        unsafe {
            std::ptr::copy_nonoverlapping(
                source.cast::<u8>(),
                block.0.as_mut_ptr(),
                LaneBlock::width(),
            );
        }
        Ok(Self::from_block(block))
    }

    /// Load from a pointer aligned to [`Vector::byte_width`].
    ///
    /// # Errors
    ///
    /// [`VectorError::NullSource`] if `source` is null.
    ///
    /// # Safety
    ///
    /// As [`Vector::load`], and `source` should be aligned to the vector
    /// width. Misalignment is not detected.
    pub unsafe fn load_aligned(source: *const T) -> VectorResult<Self> {
        // Safety: forwarded contract.
        unsafe { Self::load(source) }
    }

    /// Aligned load hinting that the data will not be reused soon.
    ///
    /// # Errors
    ///
    /// [`VectorError::NullSource`] if `source` is null.
    ///
    /// # Safety
    ///
    /// As [`Vector::load_aligned`].
    pub unsafe fn load_aligned_non_temporal(source: *const T) -> VectorResult<Self> {
        // Safety: forwarded contract.
        unsafe { Self::load_aligned(source) }
    }

    /// Load [`Vector::count`] elements of `source` starting at
    /// `element_offset`, without a bounds check.
    ///
    /// # Safety
    ///
    /// `element_offset + Vector::count()` must not exceed `source.len()`.
    pub unsafe fn load_unsafe(source: &[T], element_offset: usize) -> Self {
        debug_assert!(element_offset
            .checked_add(Self::count())
            .is_some_and(|end| end <= source.len()));
        let mut block = LaneBlock::ZERO;
        // Safety: the caller guarantees the range lies inside the slice.
        unsafe {
            let start = source.as_ptr().add(element_offset);
            std::ptr::copy_nonoverlapping(
                start.cast::<u8>(),
                block.0.as_mut_ptr(),
                LaneBlock::width(),
            );
        }
        Self::from_block(block)
    }

    /// Store to a possibly unaligned pointer.
    ///
    /// # Errors
    ///
    /// [`VectorError::NullDestination`] if `destination` is null.
    ///
    /// # Safety
    ///
    /// `destination` must be valid for writes of [`Vector::count`] elements.
    pub unsafe fn store(self, destination: *mut T) -> VectorResult<()> {
        if destination.is_null() {
            trace!("store to null pointer");
            return Err(VectorError::NullDestination);
        }
        // Safety: the caller guarantees destination is valid for width bytes.
        unsafe {
            std::ptr::copy_nonoverlapping(
                self.as_bytes().as_ptr(),
                destination.cast::<u8>(),
                LaneBlock::width(),
            );
        }
        Ok(())
    }

    /// Store to a pointer aligned to [`Vector::byte_width`].
    ///
    /// # Errors
    ///
    /// [`VectorError::NullDestination`] if `destination` is null.
    ///
    /// # Safety
    ///
    /// As [`Vector::store`], and `destination` should be aligned to the
    /// vector width. Misalignment is not detected.
    pub unsafe fn store_aligned(self, destination: *mut T) -> VectorResult<()> {
        // Safety: forwarded contract.
        unsafe { self.store(destination) }
    }

    /// Aligned store bypassing the cache where supported.
    ///
    /// # Errors
    ///
    /// [`VectorError::NullDestination`] if `destination` is null.
    ///
    /// # Safety
    ///
    /// As [`Vector::store_aligned`].
    pub unsafe fn store_aligned_non_temporal(self, destination: *mut T) -> VectorResult<()> {
        if destination.is_null() {
            trace!("non-temporal store to null pointer");
            return Err(VectorError::NullDestination);
        }
        // Safety: the caller guarantees destination is valid for width bytes.
        unsafe { accel::store_non_temporal(self.block(), destination.cast::<u8>()) };
        Ok(())
    }

    /// Store the lanes into `destination` starting at `element_offset`,
    /// without a bounds check.
    ///
    /// # Safety
    ///
    /// `element_offset + Vector::count()` must not exceed
    /// `destination.len()`.
    pub unsafe fn store_unsafe(self, destination: &mut [T], element_offset: usize) {
        debug_assert!(element_offset
            .checked_add(Self::count())
            .is_some_and(|end| end <= destination.len()));
        // Safety: the caller guarantees the range lies inside the slice.
        unsafe {
            let start = destination.as_mut_ptr().add(element_offset);
            std::ptr::copy_nonoverlapping(
                self.as_bytes().as_ptr(),
                start.cast::<u8>(),
                LaneBlock::width(),
            );
        }
    }

    /// Copy the lanes to the start of `destination`.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] if `destination` is shorter than a vector.
    pub fn copy_to(self, destination: &mut [T]) -> VectorResult<()> {
        self.copy_to_at(destination, 0)
    }

    /// Copy the lanes into `destination` starting at `offset`.
    ///
    /// # Errors
    ///
    /// - [`VectorError::OutOfRange`] if `offset` is not an index of
    ///   `destination`, or `destination` is shorter than a vector.
    /// - [`VectorError::ArgumentShape`] if fewer than [`Vector::count`]
    ///   slots follow `offset`.
    ///
    /// Nothing is written on error.
    pub fn copy_to_at(self, destination: &mut [T], offset: usize) -> VectorResult<()> {
        let count = Self::count();
        let len = destination.len();
        if offset >= len || len < count {
            trace!(offset, count, len, "copy destination out of range");
            return Err(VectorError::OutOfRange {
                index: offset,
                required: count,
                available: len,
            });
        }
        if len - offset < count {
            trace!(offset, count, len, "copy destination too short from offset");
            return Err(VectorError::ArgumentShape {
                offset,
                required: count,
                available: len - offset,
            });
        }
        destination[offset..offset + count].copy_from_slice(self.as_slice());
        Ok(())
    }

    /// Copy the lanes to the start of `destination` if it is long enough.
    /// Returns whether anything was written.
    #[must_use]
    pub fn try_copy_to(self, destination: &mut [T]) -> bool {
        match destination.get_mut(..Self::count()) {
            Some(slots) => {
                slots.copy_from_slice(self.as_slice());
                true
            }
            None => false,
        }
    }

    /// Copy the raw lane bytes to the start of `destination`.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] if `destination` is shorter than
    /// [`Vector::byte_width`].
    pub fn copy_to_bytes(self, destination: &mut [u8]) -> VectorResult<()> {
        let width = LaneBlock::width();
        if destination.len() < width {
            trace!(width, len = destination.len(), "byte destination too short");
            return Err(VectorError::OutOfRange {
                index: 0,
                required: width,
                available: destination.len(),
            });
        }
        destination[..width].copy_from_slice(self.as_bytes());
        Ok(())
    }

    /// Byte form of [`Vector::try_copy_to`].
    #[must_use]
    pub fn try_copy_to_bytes(self, destination: &mut [u8]) -> bool {
        match destination.get_mut(..LaneBlock::width()) {
            Some(slots) => {
                slots.copy_from_slice(self.as_bytes());
                true
            }
            None => false,
        }
    }
}
