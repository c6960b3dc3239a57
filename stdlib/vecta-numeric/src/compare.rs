//! Lane-wise comparisons, selection and classification.
//!
//! Mask-producing operations return a vector of the same kind whose lanes
//! are all-bits-set for `true` and zero for `false`. Masks feed
//! [`Vector::conditional_select`] and the `*_where_all_bits_set`
//! reductions.
//!
//! Comparisons use IEEE semantics, so a NaN lane compares unequal to
//! everything, itself included. `==` on [`Vector`] is [`Vector::equals_all`];
//! the NaN-tolerant relation is [`Vector::object_equals`].

use crate::element::Element;
use crate::vector::Vector;

impl<T: Element> Vector<T> {
    fn compare(self, other: Self, f: impl Fn(T, T) -> bool) -> Self {
        self.zip_map(other, |a, b| T::mask(f(a, b)))
    }

    fn classify(self, f: impl Fn(T) -> bool) -> Self {
        self.map(|x| T::mask(f(x)))
    }

    fn all_lanes(self, other: Self, f: impl Fn(T, T) -> bool) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| f(a, b))
    }

    fn any_lane(self, other: Self, f: impl Fn(T, T) -> bool) -> bool {
        self.iter().zip(other.iter()).any(|(a, b)| f(a, b))
    }

    /// Mask of `self == other`.
    #[must_use]
    pub fn equals(self, other: Self) -> Self {
        self.compare(other, |a, b| a == b)
    }

    /// Mask of `self > other`.
    #[must_use]
    pub fn greater_than(self, other: Self) -> Self {
        self.compare(other, |a, b| a > b)
    }

    /// Mask of `self >= other`.
    #[must_use]
    pub fn greater_than_or_equal(self, other: Self) -> Self {
        self.compare(other, |a, b| a >= b)
    }

    /// Mask of `self < other`.
    #[must_use]
    pub fn less_than(self, other: Self) -> Self {
        self.compare(other, |a, b| a < b)
    }

    /// Mask of `self <= other`.
    #[must_use]
    pub fn less_than_or_equal(self, other: Self) -> Self {
        self.compare(other, |a, b| a <= b)
    }

    /// Every lane IEEE-equal. False if any lane is NaN.
    #[must_use]
    pub fn equals_all(self, other: Self) -> bool {
        self.all_lanes(other, |a, b| a == b)
    }

    /// Some lane IEEE-equal.
    #[must_use]
    pub fn equals_any(self, other: Self) -> bool {
        self.any_lane(other, |a, b| a == b)
    }

    /// Every lane greater.
    #[must_use]
    pub fn greater_than_all(self, other: Self) -> bool {
        self.all_lanes(other, |a, b| a > b)
    }

    /// Some lane greater.
    #[must_use]
    pub fn greater_than_any(self, other: Self) -> bool {
        self.any_lane(other, |a, b| a > b)
    }

    /// Every lane greater or equal.
    #[must_use]
    pub fn greater_than_or_equal_all(self, other: Self) -> bool {
        self.all_lanes(other, |a, b| a >= b)
    }

    /// Some lane greater or equal.
    #[must_use]
    pub fn greater_than_or_equal_any(self, other: Self) -> bool {
        self.any_lane(other, |a, b| a >= b)
    }

    /// Every lane less.
    #[must_use]
    pub fn less_than_all(self, other: Self) -> bool {
        self.all_lanes(other, |a, b| a < b)
    }

    /// Some lane less.
    #[must_use]
    pub fn less_than_any(self, other: Self) -> bool {
        self.any_lane(other, |a, b| a < b)
    }

    /// Every lane less or equal.
    #[must_use]
    pub fn less_than_or_equal_all(self, other: Self) -> bool {
        self.all_lanes(other, |a, b| a <= b)
    }

    /// Some lane less or equal.
    #[must_use]
    pub fn less_than_or_equal_any(self, other: Self) -> bool {
        self.any_lane(other, |a, b| a <= b)
    }

    /// Bitwise select: bits of `if_true` where `mask` is set, else bits of
    /// `if_false`.
    ///
    /// ```
    /// use vecta_numeric::Vector;
    ///
    /// let a = Vector::<i32>::indices();
    /// let b = Vector::splat(-1);
    /// let picked = Vector::conditional_select(a.greater_than(Vector::splat(1)), a, b);
    /// assert_eq!(picked[0], -1);
    /// assert_eq!(picked[2], 2);
    /// ```
    #[must_use]
    pub fn conditional_select(mask: Self, if_true: Self, if_false: Self) -> Self {
        (mask & if_true) | if_false.and_not(mask)
    }

    /// Mask of NaN lanes.
    #[must_use]
    pub fn is_nan(self) -> Self {
        self.classify(T::is_nan)
    }

    /// Mask of finite lanes.
    #[must_use]
    pub fn is_finite(self) -> Self {
        self.classify(T::is_finite)
    }

    /// Mask of infinite lanes.
    #[must_use]
    pub fn is_infinity(self) -> Self {
        self.classify(T::is_infinity)
    }

    /// Mask of `+inf` lanes.
    #[must_use]
    pub fn is_positive_infinity(self) -> Self {
        self.classify(T::is_positive_infinity)
    }

    /// Mask of `-inf` lanes.
    #[must_use]
    pub fn is_negative_infinity(self) -> Self {
        self.classify(T::is_negative_infinity)
    }

    /// Mask of negative lanes (sign bit set for floats).
    #[must_use]
    pub fn is_negative(self) -> Self {
        self.classify(T::is_negative)
    }

    /// Mask of positive lanes (sign bit clear for floats).
    #[must_use]
    pub fn is_positive(self) -> Self {
        self.classify(T::is_positive)
    }

    /// Mask of zero lanes.
    #[must_use]
    pub fn is_zero(self) -> Self {
        self.classify(T::is_zero)
    }

    /// Mask of integral lanes.
    #[must_use]
    pub fn is_integer(self) -> Self {
        self.classify(T::is_integer)
    }

    /// Mask of even integral lanes.
    #[must_use]
    pub fn is_even_integer(self) -> Self {
        self.classify(T::is_even_integer)
    }

    /// Mask of odd integral lanes.
    #[must_use]
    pub fn is_odd_integer(self) -> Self {
        self.classify(T::is_odd_integer)
    }

    /// Mask of normal lanes; non-zero for integers.
    #[must_use]
    pub fn is_normal(self) -> Self {
        self.classify(T::is_normal)
    }

    /// Mask of subnormal lanes; never set for integers.
    #[must_use]
    pub fn is_subnormal(self) -> Self {
        self.classify(T::is_subnormal)
    }
}
