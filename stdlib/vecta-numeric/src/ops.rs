//! Arithmetic, bitwise, shift and saturating operators.
//!
//! Every operator is available three ways: the `std::ops` trait (`a + b`),
//! an inherent method where the name carries extra meaning
//! ([`Vector::checked_div`], [`Vector::shift_right_logical`]), and a free
//! function in this module (`ops::add(a, b)`) usable as a function pointer.
//! All three compute the same lanes.
//!
//! Integer arithmetic wraps; float arithmetic is IEEE 754. Integer
//! division by a zero lane is an error for the whole vector.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Shl, Shr, Sub};

use half::f16;
use tracing::trace;

use crate::accel::{self, BitOp};
use crate::element::{Element, IntElement};
use crate::error::{VectorError, VectorResult};
use crate::vector::Vector;

impl<T: Element> Vector<T> {
    /// Lane-wise quotient.
    ///
    /// # Errors
    ///
    /// [`VectorError::DivideByZero`] if `T` is an integer kind and any lane
    /// of `rhs` is zero. No lane is computed in that case.
    pub fn checked_div(self, rhs: Self) -> VectorResult<Self> {
        if rhs.iter().any(T::is_zero_divisor) {
            trace!(kind = %T::KIND, "vector division by zero");
            return Err(VectorError::DivideByZero);
        }
        Ok(self.zip_map(rhs, |a, b| a.checked_lane_div(b).unwrap_or(a)))
    }

    /// Divide every lane by a scalar.
    ///
    /// # Errors
    ///
    /// [`VectorError::DivideByZero`] for a zero integer divisor.
    pub fn checked_div_scalar(self, rhs: T) -> VectorResult<Self> {
        self.checked_div(Self::splat(rhs))
    }

    /// `self & !rhs`.
    #[must_use]
    pub fn and_not(self, rhs: Self) -> Self {
        Self::from_block(accel::bitwise(BitOp::AndNot, self.block(), rhs.block()))
    }

    /// Shift every lane left by `n` (masked to the lane width).
    #[must_use]
    pub fn shift_left(self, n: u32) -> Self {
        self.map(|x| x.shl_lane(n))
    }

    /// Shift right, sign-extending on signed kinds and zero-filling on
    /// unsigned ones.
    #[must_use]
    pub fn shift_right_arithmetic(self, n: u32) -> Self {
        self.map(|x| x.shr_arith_lane(n))
    }

    /// Shift right, zero-filling on every kind.
    #[must_use]
    pub fn shift_right_logical(self, n: u32) -> Self {
        self.map(|x| x.shr_logical_lane(n))
    }
}

impl<T: IntElement> Vector<T> {
    /// Lane-wise sum clamped to the range of `T`.
    ///
    /// ```
    /// use vecta_numeric::Vector;
    ///
    /// let v = Vector::splat(250u8).add_saturate(Vector::splat(10));
    /// assert_eq!(v[0], 255);
    /// ```
    #[must_use]
    pub fn add_saturate(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::saturating_add_lane)
    }

    /// Lane-wise difference clamped to the range of `T`.
    #[must_use]
    pub fn subtract_saturate(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::saturating_sub_lane)
    }
}

// ============================================================
// Operator Traits
// ============================================================

impl<T: Element> Add for Vector<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::wrapping_add)
    }
}

impl<T: Element> Sub for Vector<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::wrapping_sub)
    }
}

impl<T: Element> Mul for Vector<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::wrapping_mul)
    }
}

impl<T: Element> Mul<T> for Vector<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|x| x.wrapping_mul(rhs))
    }
}

/// # Panics
///
/// Panics if `T` is an integer kind and any lane of `rhs` is zero.
impl<T: Element> Div for Vector<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        match self.checked_div(rhs) {
            Ok(v) => v,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

/// # Panics
///
/// Panics if `T` is an integer kind and `rhs` is zero.
impl<T: Element> Div<T> for Vector<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self / Self::splat(rhs)
    }
}

impl<T: Element> Neg for Vector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(T::wrapping_neg)
    }
}

impl<T: Element> BitAnd for Vector<T> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_block(accel::bitwise(BitOp::And, self.block(), rhs.block()))
    }
}

impl<T: Element> BitOr for Vector<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_block(accel::bitwise(BitOp::Or, self.block(), rhs.block()))
    }
}

impl<T: Element> BitXor for Vector<T> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self::from_block(accel::bitwise(BitOp::Xor, self.block(), rhs.block()))
    }
}

impl<T: Element> Not for Vector<T> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_block(accel::not(self.block()))
    }
}

impl<T: Element> Shl<u32> for Vector<T> {
    type Output = Self;

    fn shl(self, n: u32) -> Self {
        self.shift_left(n)
    }
}

impl<T: Element> Shr<u32> for Vector<T> {
    type Output = Self;

    fn shr(self, n: u32) -> Self {
        self.shift_right_arithmetic(n)
    }
}

macro_rules! scalar_lhs {
    ($($t:ty),*) => {$(
        impl Mul<Vector<$t>> for $t {
            type Output = Vector<$t>;

            fn mul(self, rhs: Vector<$t>) -> Vector<$t> {
                rhs.map(|x| self.wrapping_mul(x))
            }
        }
    )*};
}

scalar_lhs!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize, f16, f32, f64);

// ============================================================
// Free Functions
// ============================================================

/// `a + b`.
pub fn add<T: Element>(a: Vector<T>, b: Vector<T>) -> Vector<T> {
    a + b
}

/// `a - b`.
pub fn subtract<T: Element>(a: Vector<T>, b: Vector<T>) -> Vector<T> {
    a - b
}

/// `a * b`.
pub fn multiply<T: Element>(a: Vector<T>, b: Vector<T>) -> Vector<T> {
    a * b
}

/// `a * s`.
pub fn multiply_scalar<T: Element>(a: Vector<T>, s: T) -> Vector<T> {
    a * s
}

/// [`Vector::checked_div`].
///
/// # Errors
///
/// [`VectorError::DivideByZero`] for a zero integer lane in `b`.
pub fn divide<T: Element>(a: Vector<T>, b: Vector<T>) -> VectorResult<Vector<T>> {
    a.checked_div(b)
}

/// `-a`.
pub fn negate<T: Element>(a: Vector<T>) -> Vector<T> {
    -a
}

/// `a & b`.
pub fn bitwise_and<T: Element>(a: Vector<T>, b: Vector<T>) -> Vector<T> {
    a & b
}

/// `a | b`.
pub fn bitwise_or<T: Element>(a: Vector<T>, b: Vector<T>) -> Vector<T> {
    a | b
}

/// `a ^ b`.
pub fn xor<T: Element>(a: Vector<T>, b: Vector<T>) -> Vector<T> {
    a ^ b
}

/// `!a`.
pub fn ones_complement<T: Element>(a: Vector<T>) -> Vector<T> {
    !a
}

/// `a & !b`.
pub fn and_not<T: Element>(a: Vector<T>, b: Vector<T>) -> Vector<T> {
    a.and_not(b)
}

/// `a << n`.
pub fn shift_left<T: Element>(a: Vector<T>, n: u32) -> Vector<T> {
    a.shift_left(n)
}

/// `a >> n`.
pub fn shift_right_arithmetic<T: Element>(a: Vector<T>, n: u32) -> Vector<T> {
    a.shift_right_arithmetic(n)
}

/// Zero-filling `a >> n`.
pub fn shift_right_logical<T: Element>(a: Vector<T>, n: u32) -> Vector<T> {
    a.shift_right_logical(n)
}

/// [`Vector::add_saturate`].
pub fn add_saturate<T: IntElement>(a: Vector<T>, b: Vector<T>) -> Vector<T> {
    a.add_saturate(b)
}

/// [`Vector::subtract_saturate`].
pub fn subtract_saturate<T: IntElement>(a: Vector<T>, b: Vector<T>) -> Vector<T> {
    a.subtract_saturate(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_arithmetic() {
        let max = Vector::splat(i32::MAX);
        assert_eq!(max + Vector::one(), Vector::splat(i32::MIN));
        assert_eq!(Vector::<u8>::zero() - Vector::one(), Vector::splat(255));
        assert_eq!(Vector::splat(16u8) * Vector::splat(16), Vector::zero());
        assert_eq!(-Vector::splat(i8::MIN), Vector::splat(i8::MIN));
        assert_eq!(-Vector::splat(1u32), Vector::splat(u32::MAX));
    }

    #[test]
    fn test_scalar_forms() {
        let v = Vector::<f64>::indices();
        assert_eq!((v * 2.0)[3], 6.0);
        assert_eq!((2.0 * v)[3], 6.0);
        assert_eq!((v / 2.0)[3], 1.5);
        assert_eq!((Vector::splat(9i64) / 3)[0], 3);
    }

    #[test]
    fn test_integer_divide_by_zero() {
        let a = Vector::<i32>::indices();
        let b = Vector::<i32>::one().with_element(1, 0).unwrap();
        assert_eq!(a.checked_div(b), Err(VectorError::DivideByZero));
        assert_eq!(a.checked_div_scalar(0), Err(VectorError::DivideByZero));
        assert_eq!(divide(a, Vector::one()), Ok(a));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_operator_panics() {
        let _ = Vector::splat(1u16) / Vector::zero();
    }

    #[test]
    fn test_float_divide_by_zero() {
        let v = Vector::splat(1.0f32) / Vector::zero();
        assert!(v.iter().all(|x| x == f32::INFINITY));
        let nan = Vector::<f64>::zero() / Vector::zero();
        assert!(nan.iter().all(f64::is_nan));
    }

    #[test]
    fn test_min_over_minus_one_wraps() {
        let v = Vector::splat(i64::MIN).checked_div(Vector::splat(-1)).unwrap();
        assert_eq!(v, Vector::splat(i64::MIN));
    }

    #[test]
    fn test_bitwise() {
        let a = Vector::splat(0b1100u8);
        let b = Vector::splat(0b1010u8);
        assert_eq!(a & b, Vector::splat(0b1000));
        assert_eq!(a | b, Vector::splat(0b1110));
        assert_eq!(a ^ b, Vector::splat(0b0110));
        assert_eq!(a.and_not(b), Vector::splat(0b0100));
        assert_eq!(!a, Vector::splat(!0b1100u8));
    }

    #[test]
    fn test_bitwise_on_floats() {
        let v = Vector::splat(-2.5f32);
        let sign = Vector::splat(-0.0f32);
        assert_eq!(v.and_not(sign), Vector::splat(2.5));
        assert_eq!(v ^ sign, Vector::splat(2.5));
    }

    #[test]
    fn test_shifts() {
        let v = Vector::splat(-16i16);
        assert_eq!(v << 1, Vector::splat(-32));
        assert_eq!(v >> 2, Vector::splat(-4));
        assert_eq!(v.shift_right_logical(12), Vector::splat(0xF));
        // Count is masked to the lane width.
        assert_eq!(Vector::splat(1u32) << 33, Vector::splat(2));
        assert_eq!(Vector::splat(0x80u8) >> 7, Vector::splat(1));
    }

    #[test]
    fn test_float_shifts_use_bit_pattern() {
        let v = Vector::splat(1.0f32) >> 23;
        assert_eq!(v.reinterpret::<u32>(), Vector::splat(0x7F));
        let neg = Vector::splat(-1.0f64).shift_right_arithmetic(63);
        assert_eq!(neg.reinterpret::<i64>(), Vector::splat(-1));
    }

    #[test]
    fn test_saturating() {
        assert_eq!(
            Vector::splat(250u8).add_saturate(Vector::splat(10)),
            Vector::splat(255)
        );
        assert_eq!(
            Vector::splat(5u8).subtract_saturate(Vector::splat(10)),
            Vector::zero()
        );
        assert_eq!(
            add_saturate(Vector::splat(i16::MAX), Vector::one()),
            Vector::splat(i16::MAX)
        );
        assert_eq!(
            subtract_saturate(Vector::splat(i16::MIN), Vector::one()),
            Vector::splat(i16::MIN)
        );
    }
}
