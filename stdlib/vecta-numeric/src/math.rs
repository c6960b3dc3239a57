//! Min/max families, rounding and transcendental functions.
//!
//! The min/max variants follow IEEE 754-2019:
//!
//! | Function | NaN operand | `-0.0` vs `+0.0` |
//! |----------|-------------|------------------|
//! | `min`, `max` | propagates | `-0.0` is smaller |
//! | `min_number`, `max_number` | the other operand wins | `-0.0` is smaller |
//! | `*_magnitude` | propagates | compares `|x|`, ties go to the sign |
//! | `*_magnitude_number` | the other operand wins | as above |

use std::cmp::Ordering;

use crate::element::{Element, FloatElement, RoundingMode};
use crate::vector::Vector;

fn lane_max<T: Element>(x: T, y: T) -> T {
    if x != y {
        if !x.is_nan() {
            return if y < x { x } else { y };
        }
        return x;
    }
    if y.is_negative() {
        x
    } else {
        y
    }
}

fn lane_min<T: Element>(x: T, y: T) -> T {
    if x != y {
        if !x.is_nan() {
            return if x < y { x } else { y };
        }
        return x;
    }
    if x.is_negative() {
        x
    } else {
        y
    }
}

fn lane_max_number<T: Element>(x: T, y: T) -> T {
    if x != y {
        if !y.is_nan() {
            return if y < x { x } else { y };
        }
        return x;
    }
    if y.is_negative() {
        x
    } else {
        y
    }
}

fn lane_min_number<T: Element>(x: T, y: T) -> T {
    if x != y {
        if !y.is_nan() {
            return if x < y { x } else { y };
        }
        return x;
    }
    if x.is_negative() {
        x
    } else {
        y
    }
}

fn lane_max_magnitude<T: Element>(x: T, y: T, prefer_number: bool) -> T {
    match x.magnitude_cmp(y) {
        Some(Ordering::Greater) => x,
        Some(Ordering::Less) => y,
        Some(Ordering::Equal) => {
            if x.is_negative() {
                y
            } else {
                x
            }
        }
        None if prefer_number => {
            if y.is_nan() {
                x
            } else {
                y
            }
        }
        None => {
            if x.is_nan() {
                x
            } else {
                y
            }
        }
    }
}

fn lane_min_magnitude<T: Element>(x: T, y: T, prefer_number: bool) -> T {
    match x.magnitude_cmp(y) {
        Some(Ordering::Less) => x,
        Some(Ordering::Greater) => y,
        Some(Ordering::Equal) => {
            if x.is_negative() {
                x
            } else {
                y
            }
        }
        None if prefer_number => {
            if y.is_nan() {
                x
            } else {
                y
            }
        }
        None => {
            if x.is_nan() {
                x
            } else {
                y
            }
        }
    }
}

impl<T: Element> Vector<T> {
    /// Lane-wise maximum; NaN propagates.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, lane_max)
    }

    /// Lane-wise minimum; NaN propagates.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, lane_min)
    }

    /// Lane-wise maximum preferring a number over NaN.
    #[must_use]
    pub fn max_number(self, other: Self) -> Self {
        self.zip_map(other, lane_max_number)
    }

    /// Lane-wise minimum preferring a number over NaN.
    #[must_use]
    pub fn min_number(self, other: Self) -> Self {
        self.zip_map(other, lane_min_number)
    }

    /// Lane with the larger absolute value; NaN propagates.
    #[must_use]
    pub fn max_magnitude(self, other: Self) -> Self {
        self.zip_map(other, |x, y| lane_max_magnitude(x, y, false))
    }

    /// Lane with the smaller absolute value; NaN propagates.
    #[must_use]
    pub fn min_magnitude(self, other: Self) -> Self {
        self.zip_map(other, |x, y| lane_min_magnitude(x, y, false))
    }

    /// Lane with the larger absolute value, preferring a number over NaN.
    #[must_use]
    pub fn max_magnitude_number(self, other: Self) -> Self {
        self.zip_map(other, |x, y| lane_max_magnitude(x, y, true))
    }

    /// Lane with the smaller absolute value, preferring a number over NaN.
    #[must_use]
    pub fn min_magnitude_number(self, other: Self) -> Self {
        self.zip_map(other, |x, y| lane_min_magnitude(x, y, true))
    }

    /// `min(max(self, lo), hi)` per lane. Bounds are not validated.
    #[must_use]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// Absolute value; integer `MIN` stays `MIN`.
    #[must_use]
    pub fn abs(self) -> Self {
        self.map(T::abs_lane)
    }

    /// Square root. Integer lanes are computed in `f64` and truncated.
    #[must_use]
    pub fn square_root(self) -> Self {
        self.map(T::sqrt_lane)
    }

    /// Round toward positive infinity.
    #[must_use]
    pub fn ceiling(self) -> Self {
        self.round_with(RoundingMode::ToPositiveInfinity)
    }

    /// Round toward negative infinity.
    #[must_use]
    pub fn floor(self) -> Self {
        self.round_with(RoundingMode::ToNegativeInfinity)
    }

    /// Round to nearest, ties to even.
    #[must_use]
    pub fn round(self) -> Self {
        self.round_with(RoundingMode::ToEven)
    }

    /// Round with an explicit mode.
    #[must_use]
    pub fn round_with(self, mode: RoundingMode) -> Self {
        self.map(|x| x.round_lane(mode))
    }

    /// Round toward zero.
    #[must_use]
    pub fn truncate(self) -> Self {
        self.round_with(RoundingMode::ToZero)
    }
}

impl<T: FloatElement> Vector<T> {
    /// `e^x` per lane.
    #[must_use]
    pub fn exp(self) -> Self {
        self.map(T::exp_lane)
    }

    /// Natural logarithm per lane.
    #[must_use]
    pub fn log(self) -> Self {
        self.map(T::ln_lane)
    }

    /// Base-2 logarithm per lane.
    #[must_use]
    pub fn log2(self) -> Self {
        self.map(T::log2_lane)
    }

    /// Sine per lane.
    #[must_use]
    pub fn sin(self) -> Self {
        self.map(T::sin_lane)
    }

    /// Cosine per lane.
    #[must_use]
    pub fn cos(self) -> Self {
        self.map(T::cos_lane)
    }

    /// `(sin, cos)` per lane.
    #[must_use]
    pub fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// `sqrt(self^2 + other^2)` per lane.
    #[must_use]
    pub fn hypot(self, other: Self) -> Self {
        self.zip_map(other, T::hypot_lane)
    }

    /// Linear interpolation `self * (1 - t) + other * t`.
    #[must_use]
    pub fn lerp(self, other: Self, t: Self) -> Self {
        self.zip3_map(other, t, T::lerp_lane)
    }

    /// `self * a + b` rounded once.
    #[must_use]
    pub fn fused_multiply_add(self, a: Self, b: Self) -> Self {
        self.zip3_map(a, b, T::mul_add_lane)
    }

    /// `self * a + b`, fused or not, whichever is faster.
    #[must_use]
    pub fn multiply_add_estimate(self, a: Self, b: Self) -> Self {
        self.zip3_map(a, b, T::mul_add_unfused_lane)
    }

    /// Magnitude of `self` with the sign of `sign`.
    #[must_use]
    pub fn copy_sign(self, sign: Self) -> Self {
        self.zip_map(sign, T::copysign_lane)
    }

    /// Degrees to radians.
    #[must_use]
    pub fn degrees_to_radians(self) -> Self {
        self.map(T::to_radians_lane)
    }

    /// Radians to degrees.
    #[must_use]
    pub fn radians_to_degrees(self) -> Self {
        self.map(T::to_degrees_lane)
    }
}
