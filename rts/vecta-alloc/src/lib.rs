//! SIMD-aligned allocation for vecta.
//!
//! The aligned and non-temporal load/store operations of `vecta-numeric`
//! leave alignment as a caller contract. This crate gives callers a way to
//! meet it: [`AlignedBuffer`] owns a zero-initialized block of `T` whose
//! start is aligned to a chosen [`Alignment`], typically the process vector
//! width reported by `vecta-target`.
//!
//! # Example
//!
//! ```
//! use vecta_alloc::{is_aligned, AlignedBuffer};
//!
//! let buffer: AlignedBuffer<f32> = AlignedBuffer::for_vectors(64).unwrap();
//! assert_eq!(buffer.len(), 64);
//! assert!(is_aligned(buffer.as_ptr().cast(), vecta_target::vector_bytes()));
//! ```

#![warn(missing_docs)]

use bytemuck::Zeroable;
use std::alloc::{Layout, LayoutError};
use std::ptr::NonNull;

/// Alignment requirements for different allocation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// SIMD 128-bit alignment (16 bytes).
    Simd128,
    /// SIMD 256-bit alignment (32 bytes).
    Simd256,
    /// SIMD 512-bit alignment (64 bytes), also a cache line.
    Simd512,
}

impl Alignment {
    /// Get the alignment value in bytes.
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        match self {
            Self::Simd128 => 16,
            Self::Simd256 => 32,
            Self::Simd512 => 64,
        }
    }

    /// The SIMD alignment matching a vector width in bytes.
    #[must_use]
    pub const fn for_vector_bytes(bytes: usize) -> Option<Self> {
        match bytes {
            16 => Some(Self::Simd128),
            32 => Some(Self::Simd256),
            64 => Some(Self::Simd512),
            _ => None,
        }
    }

    /// The SIMD alignment of the process-wide vector width.
    #[must_use]
    pub fn for_host() -> Self {
        Self::for_vector_bytes(vecta_target::vector_bytes()).unwrap_or(Self::Simd512)
    }
}

/// Result type for allocation operations.
pub type AllocResult<T> = Result<T, AllocError>;

/// Errors that can occur during allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocError {
    /// Out of memory.
    OutOfMemory {
        /// Requested allocation size.
        requested: usize,
    },
    /// Invalid layout (size overflow or bad alignment).
    InvalidLayout(String),
}

impl std::fmt::Display for AllocError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: failed to allocate {requested} bytes")
            }
            Self::InvalidLayout(msg) => write!(f, "invalid layout: {msg}"),
        }
    }
}

impl std::error::Error for AllocError {}

impl From<LayoutError> for AllocError {
    fn from(e: LayoutError) -> Self {
        Self::InvalidLayout(e.to_string())
    }
}

/// Allocation strategy behind [`AlignedBuffer`].
pub trait Allocator {
    /// Allocate a zero-filled block with the given layout.
    ///
    /// # Safety
    ///
    /// The returned pointer must be released with `deallocate` using the same
    /// layout and must not be used afterwards.
    unsafe fn allocate_zeroed(&self, layout: Layout) -> AllocResult<NonNull<u8>>;

    /// Release a block.
    ///
    /// # Safety
    ///
    /// `ptr` must come from `allocate_zeroed` on this allocator with `layout`,
    /// and must not have been released already.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// Allocator backed by the global system allocator.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlignedAllocator;

impl Allocator for AlignedAllocator {
    unsafe fn allocate_zeroed(&self, layout: Layout) -> AllocResult<NonNull<u8>> {
        if layout.size() == 0 {
            // Dangling but aligned.
            return NonNull::new(layout.align() as *mut u8).ok_or_else(|| {
                AllocError::InvalidLayout("zero alignment".to_string())
            });
        }

        // Safety: layout has a non-zero size.
        let ptr = unsafe { std::alloc::alloc_zeroed(layout) };
        NonNull::new(ptr).ok_or(AllocError::OutOfMemory {
            requested: layout.size(),
        })
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() == 0 {
            return;
        }
        // Safety: the caller guarantees ptr came from allocate_zeroed with layout.
        unsafe { std::alloc::dealloc(ptr.as_ptr(), layout) };
    }
}

/// An owned, zero-initialized, aligned buffer of `T`.
pub struct AlignedBuffer<T> {
    ptr: NonNull<T>,
    len: usize,
    layout: Layout,
    allocator: AlignedAllocator,
}

// Safety: AlignedBuffer uniquely owns its allocation, like Box<[T]>.
unsafe impl<T: Send> Send for AlignedBuffer<T> {}
unsafe impl<T: Sync> Sync for AlignedBuffer<T> {}

impl<T: Zeroable + Copy> AlignedBuffer<T> {
    /// Allocate `len` zeroed elements whose start is aligned to `alignment`
    /// (or to `T`'s own alignment when that is larger).
    pub fn new_aligned(len: usize, alignment: Alignment) -> AllocResult<Self> {
        let size = std::mem::size_of::<T>()
            .checked_mul(len)
            .ok_or_else(|| AllocError::InvalidLayout("size overflow".to_string()))?;
        let align = alignment.as_usize().max(std::mem::align_of::<T>());
        let layout = Layout::from_size_align(size, align)?;
        let allocator = AlignedAllocator;

        // Safety: released in Drop with the same layout.
        let ptr = unsafe { allocator.allocate_zeroed(layout)? };

        Ok(Self {
            ptr: ptr.cast(),
            len,
            layout,
            allocator,
        })
    }

    /// Allocate `len` zeroed elements aligned to the process vector width.
    pub fn for_vectors(len: usize) -> AllocResult<Self> {
        Self::new_aligned(len, Alignment::for_host())
    }

    /// Allocate a buffer holding a copy of `src`.
    pub fn from_slice(src: &[T], alignment: Alignment) -> AllocResult<Self> {
        let mut buffer = Self::new_aligned(src.len(), alignment)?;
        buffer.as_mut_slice().copy_from_slice(src);
        Ok(buffer)
    }
}

impl<T> AlignedBuffer<T> {
    /// Get the length (number of elements) of this buffer.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if this buffer is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Alignment of the buffer start in bytes.
    #[inline]
    #[must_use]
    pub const fn alignment(&self) -> usize {
        self.layout.align()
    }

    /// Get a raw pointer to the buffer's data.
    #[inline]
    #[must_use]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Get a mutable raw pointer to the buffer's data.
    #[inline]
    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// View the buffer as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // Safety: the block holds len initialized (zeroed or written) elements.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// View the buffer as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: as above, and &mut self guarantees exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> std::ops::Deref for AlignedBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> std::ops::DerefMut for AlignedBuffer<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Drop for AlignedBuffer<T> {
    fn drop(&mut self) {
        // Safety: ptr was allocated by our allocator with this layout.
        unsafe {
            self.allocator.deallocate(self.ptr.cast(), self.layout);
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for AlignedBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .field("alignment", &self.layout.align())
            .finish()
    }
}

/// Utility function to check if a pointer is aligned.
#[inline]
#[must_use]
pub fn is_aligned(ptr: *const u8, align: usize) -> bool {
    debug_assert!(align.is_power_of_two());
    (ptr as usize) & (align - 1) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_values() {
        assert_eq!(Alignment::Simd128.as_usize(), 16);
        assert_eq!(Alignment::Simd256.as_usize(), 32);
        assert_eq!(Alignment::Simd512.as_usize(), 64);
    }

    #[test]
    fn test_alignment_for_vector_bytes() {
        assert_eq!(Alignment::for_vector_bytes(16), Some(Alignment::Simd128));
        assert_eq!(Alignment::for_vector_bytes(32), Some(Alignment::Simd256));
        assert_eq!(Alignment::for_vector_bytes(64), Some(Alignment::Simd512));
        assert_eq!(Alignment::for_vector_bytes(8), None);
        assert_eq!(
            Alignment::for_host().as_usize(),
            vecta_target::vector_bytes()
        );
    }

    #[test]
    fn test_is_aligned() {
        let aligned_ptr = 0x1000 as *const u8;
        let unaligned_ptr = 0x1001 as *const u8;

        assert!(is_aligned(aligned_ptr, 8));
        assert!(is_aligned(aligned_ptr, 4096));
        assert!(!is_aligned(unaligned_ptr, 8));
    }

    #[test]
    fn test_alloc_error_display() {
        let err = AllocError::OutOfMemory { requested: 1024 };
        assert!(err.to_string().contains("1024"));
        let err = AllocError::InvalidLayout("size overflow".to_string());
        assert_eq!(err.to_string(), "invalid layout: size overflow");
    }

    #[test]
    fn test_allocator_zeroed_and_aligned() {
        let alloc = AlignedAllocator;
        let layout = Layout::from_size_align(1024, 64).unwrap();

        unsafe {
            let ptr = alloc.allocate_zeroed(layout).unwrap();
            assert!(is_aligned(ptr.as_ptr(), 64));
            let bytes = std::slice::from_raw_parts(ptr.as_ptr(), 1024);
            assert!(bytes.iter().all(|&b| b == 0));
            alloc.deallocate(ptr, layout);
        }
    }

    #[test]
    fn test_buffer_alignments() {
        for alignment in [
            Alignment::Simd128,
            Alignment::Simd256,
            Alignment::Simd512,
        ] {
            let buffer: AlignedBuffer<u8> = AlignedBuffer::new_aligned(100, alignment).unwrap();
            assert!(
                is_aligned(buffer.as_ptr(), alignment.as_usize()),
                "buffer not aligned to {alignment:?}"
            );
            assert_eq!(buffer.alignment(), alignment.as_usize());
        }
    }

    #[test]
    fn test_buffer_zeroed_and_writable() {
        let mut buffer: AlignedBuffer<u64> =
            AlignedBuffer::new_aligned(50, Alignment::Simd256).unwrap();
        assert!(buffer.iter().all(|&v| v == 0));

        buffer[49] = 7;
        assert_eq!(buffer.as_slice()[49], 7);
    }

    #[test]
    fn test_buffer_element_alignment_floor() {
        // u128 lanes never get less than their own alignment.
        let buffer: AlignedBuffer<u128> =
            AlignedBuffer::new_aligned(4, Alignment::Simd128).unwrap();
        assert!(buffer.alignment() >= std::mem::align_of::<u128>());
        assert!(is_aligned(buffer.as_ptr().cast(), buffer.alignment()));
    }

    #[test]
    fn test_buffer_from_slice() {
        let buffer = AlignedBuffer::from_slice(&[1i32, 2, 3, 4, 5], Alignment::Simd128).unwrap();
        assert_eq!(&*buffer, &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_buffer_empty() {
        let buffer: AlignedBuffer<i32> = AlignedBuffer::new_aligned(0, Alignment::Simd512).unwrap();
        assert!(buffer.is_empty());
        assert!(buffer.as_slice().is_empty());
        assert!(is_aligned(buffer.as_ptr().cast(), 64));
    }

    #[test]
    fn test_buffer_size_overflow() {
        let result: AllocResult<AlignedBuffer<u64>> =
            AlignedBuffer::new_aligned(usize::MAX, Alignment::Simd128);
        assert!(matches!(result, Err(AllocError::InvalidLayout(_))));
    }
}
