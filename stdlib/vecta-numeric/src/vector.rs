//! The fixed-width vector value type.
//!
//! # Overview
//!
//! `Vector<T>` is an immutable `Copy` value holding [`Vector::count`] lanes
//! of `T`. Storage is inline: constructing, copying or dropping a vector
//! never touches the heap.
//!
//! Construction from slices and byte buffers checks bounds before copying
//! anything, so a failed construction has no observable effect.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Index;

use tracing::trace;

use crate::element::Element;
use crate::error::{VectorError, VectorResult};
use crate::storage::LaneBlock;

// ============================================================
// Core Vector Type
// ============================================================

/// A fixed-width block of `T` lanes.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<T: Element> {
    block: LaneBlock,
    _kind: PhantomData<T>,
}

impl<T: Element> Vector<T> {
    #[inline]
    pub(crate) const fn from_block(block: LaneBlock) -> Self {
        Self {
            block,
            _kind: PhantomData,
        }
    }

    #[inline]
    pub(crate) const fn block(&self) -> &LaneBlock {
        &self.block
    }

    /// Number of lanes. Constant for `T` over the life of the process.
    #[inline]
    #[must_use]
    pub fn count() -> usize {
        LaneBlock::width() / std::mem::size_of::<T>()
    }

    /// Size of every vector in bytes.
    #[inline]
    #[must_use]
    pub fn byte_width() -> usize {
        LaneBlock::width()
    }

    /// All lanes zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self::from_block(LaneBlock::ZERO)
    }

    /// All lanes one.
    #[must_use]
    pub fn one() -> Self {
        Self::splat(T::ONE)
    }

    /// All lanes with every bit set.
    #[must_use]
    pub fn all_bits_set() -> Self {
        Self::splat(T::all_bits_set())
    }

    /// Every lane set to `value`.
    #[must_use]
    pub fn splat(value: T) -> Self {
        let mut block = LaneBlock::ZERO;
        block.lanes_mut::<T>().fill(value);
        Self::from_block(block)
    }

    /// Lane `i` set to `f(i)`.
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
        let mut block = LaneBlock::ZERO;
        for (i, lane) in block.lanes_mut::<T>().iter_mut().enumerate() {
            *lane = f(i);
        }
        Self::from_block(block)
    }

    /// Lane `i` holds `i`.
    #[must_use]
    pub fn indices() -> Self {
        Self::from_fn(T::from_usize_wrapping)
    }

    /// Lane `i` holds `start + i * step`, wrapping for integers.
    ///
    /// ```
    /// use vecta_numeric::Vector;
    ///
    /// let v = Vector::<i32>::create_sequence(10, -1);
    /// assert_eq!(v[0], 10);
    /// assert_eq!(v[3], 7);
    /// ```
    #[must_use]
    pub fn create_sequence(start: T, step: T) -> Self {
        Self::from_fn(|i| start.wrapping_add(T::from_usize_wrapping(i).wrapping_mul(step)))
    }

    /// The first [`Vector::count`] values of a slice.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] if the slice is shorter than a vector.
    pub fn from_slice(values: &[T]) -> VectorResult<Self> {
        Self::from_slice_at(values, 0)
    }

    /// [`Vector::count`] values of a slice starting at `offset`.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] if fewer than `count()` values follow `offset`.
    pub fn from_slice_at(values: &[T], offset: usize) -> VectorResult<Self> {
        let count = Self::count();
        let end = offset
            .checked_add(count)
            .filter(|&end| end <= values.len())
            .ok_or_else(|| {
                trace!(offset, count, len = values.len(), "slice too short for vector");
                VectorError::OutOfRange {
                    index: offset,
                    required: count,
                    available: values.len(),
                }
            })?;

        let mut block = LaneBlock::ZERO;
        block
            .lanes_mut::<T>()
            .copy_from_slice(&values[offset..end]);
        Ok(Self::from_block(block))
    }

    /// Reinterpret the first [`Vector::byte_width`] bytes of a buffer.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] if the buffer is shorter than a vector.
    pub fn from_bytes(bytes: &[u8]) -> VectorResult<Self> {
        let width = LaneBlock::width();
        if bytes.len() < width {
            trace!(width, len = bytes.len(), "byte buffer too short for vector");
            return Err(VectorError::OutOfRange {
                index: 0,
                required: width,
                available: bytes.len(),
            });
        }

        let mut block = LaneBlock::ZERO;
        block.bytes_mut().copy_from_slice(&bytes[..width]);
        Ok(Self::from_block(block))
    }

    /// Lanes as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.block.lanes()
    }

    /// Raw lane bytes in memory order.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.block.bytes()
    }

    /// Copy the lanes into a new `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Iterate over lane values.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.as_slice().iter().copied()
    }

    /// Lane 0.
    #[must_use]
    pub fn to_scalar(&self) -> T {
        self.as_slice()[0]
    }

    /// Read one lane.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] if `index >= count()`.
    pub fn get(&self, index: usize) -> VectorResult<T> {
        self.as_slice().get(index).copied().ok_or_else(|| {
            trace!(index, count = Self::count(), "lane index out of range");
            VectorError::OutOfRange {
                index,
                required: index + 1,
                available: Self::count(),
            }
        })
    }

    /// Copy of `self` with one lane replaced.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] if `index >= count()`.
    pub fn with_element(self, index: usize, value: T) -> VectorResult<Self> {
        let mut out = self;
        match out.block.lanes_mut::<T>().get_mut(index) {
            Some(lane) => {
                *lane = value;
                Ok(out)
            }
            None => {
                trace!(index, count = Self::count(), "lane index out of range");
                Err(VectorError::OutOfRange {
                    index,
                    required: index + 1,
                    available: Self::count(),
                })
            }
        }
    }

    /// Object equality: every lane [`Element::equivalent`], so NaN lanes
    /// match any NaN and `+0.0` matches `-0.0`. [`Hash`] agrees with this
    /// relation.
    ///
    /// ```
    /// use vecta_numeric::Vector;
    ///
    /// let nan = Vector::splat(f64::NAN);
    /// assert!(nan.object_equals(nan));
    /// assert!(nan != nan);
    /// ```
    #[must_use]
    pub fn object_equals(self, other: Self) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| a.equivalent(b))
    }

    /// The same bytes viewed as lanes of `U`.
    ///
    /// ```
    /// use vecta_numeric::Vector;
    ///
    /// let bits = Vector::<f32>::splat(1.0).reinterpret::<u32>();
    /// assert_eq!(bits[0], 0x3F80_0000);
    /// ```
    #[inline]
    #[must_use]
    pub fn reinterpret<U: Element>(self) -> Vector<U> {
        Vector::from_block(self.block)
    }

    // Lane-wise helpers shared by the operator modules.

    #[inline]
    pub(crate) fn map(self, f: impl Fn(T) -> T) -> Self {
        let mut out = self;
        for lane in out.block.lanes_mut::<T>() {
            *lane = f(*lane);
        }
        out
    }

    /// Map into another kind of the same size.
    #[inline]
    pub(crate) fn map_to<U: Element>(self, f: impl Fn(T) -> U) -> Vector<U> {
        debug_assert_eq!(std::mem::size_of::<T>(), std::mem::size_of::<U>());
        let mut block = LaneBlock::ZERO;
        for (out, &lane) in block.lanes_mut::<U>().iter_mut().zip(self.as_slice()) {
            *out = f(lane);
        }
        Vector::from_block(block)
    }

    #[inline]
    pub(crate) fn zip_map(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        let mut out = self;
        for (lane, &rhs) in out.block.lanes_mut::<T>().iter_mut().zip(other.as_slice()) {
            *lane = f(*lane, rhs);
        }
        out
    }

    #[inline]
    pub(crate) fn zip3_map(self, b: Self, c: Self, f: impl Fn(T, T, T) -> T) -> Self {
        Self::from_fn(|i| f(self.as_slice()[i], b.as_slice()[i], c.as_slice()[i]))
    }
}

// ============================================================
// Trait Implementations
// ============================================================

impl<T: Element> Default for Vector<T> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Lane-wise IEEE equality, the same relation as [`Vector::equals_all`]:
/// any NaN lane makes two vectors unequal.
impl<T: Element> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals_all(*other)
    }
}

/// Consistent with [`Vector::object_equals`].
impl<T: Element> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for lane in self.iter() {
            lane.hash_lane(state);
        }
    }
}

impl<T: Element> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T: Element> TryFrom<&[T]> for Vector<T> {
    type Error = VectorError;

    fn try_from(values: &[T]) -> VectorResult<Self> {
        Self::from_slice(values)
    }
}

impl<T: Element> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.to_vec()
    }
}

fn write_lanes<T: Element>(
    v: &Vector<T>,
    f: &mut fmt::Formatter<'_>,
    lane: impl Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    f.write_str("<")?;
    for (i, value) in v.as_slice().iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        lane(value, f)?;
    }
    f.write_str(">")
}

/// Formats as `<a, b, c>`. Width, precision and sign flags apply to each
/// lane.
impl<T: Element> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lanes(self, f, |x, f| fmt::Display::fmt(x, f))
    }
}

impl<T: Element> fmt::LowerExp for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lanes(self, f, |x, f| fmt::LowerExp::fmt(x, f))
    }
}

impl<T: Element> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector<{}>", T::KIND)?;
        f.debug_list().entries(self.as_slice()).finish()
    }
}
