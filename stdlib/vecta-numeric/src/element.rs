//! Element kinds and their per-lane capabilities.
//!
//! The set of lane types is closed: [`Element`] is sealed and implemented
//! for the primitive integers (8 to 128 bits plus `usize`/`isize`) and for
//! `f16`, `f32` and `f64`. Every vector operation is written once against
//! this trait; the per-kind differences (wrapping integers versus IEEE
//! floats, NaN handling, integer classification conventions) live here.

use bytemuck::Pod;
use half::f16;
use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

mod sealed {
    pub trait Sealed {}
}

/// Tag for each supported element kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `u8`
    U8,
    /// `i8`
    I8,
    /// `u16`
    U16,
    /// `i16`
    I16,
    /// `u32`
    U32,
    /// `i32`
    I32,
    /// `u64`
    U64,
    /// `i64`
    I64,
    /// `u128`
    U128,
    /// `i128`
    I128,
    /// `usize`
    Usize,
    /// `isize`
    Isize,
    /// `half::f16`
    F16,
    /// `f32`
    F32,
    /// `f64`
    F64,
}

impl ElementKind {
    /// Every supported kind.
    pub const ALL: [Self; 15] = [
        Self::U8,
        Self::I8,
        Self::U16,
        Self::I16,
        Self::U32,
        Self::I32,
        Self::U64,
        Self::I64,
        Self::U128,
        Self::I128,
        Self::Usize,
        Self::Isize,
        Self::F16,
        Self::F32,
        Self::F64,
    ];

    /// Look up the kind of an arbitrary type, `None` if unsupported.
    #[must_use]
    pub fn of<T: 'static>() -> Option<Self> {
        let id = TypeId::of::<T>();
        let table = [
            (TypeId::of::<u8>(), Self::U8),
            (TypeId::of::<i8>(), Self::I8),
            (TypeId::of::<u16>(), Self::U16),
            (TypeId::of::<i16>(), Self::I16),
            (TypeId::of::<u32>(), Self::U32),
            (TypeId::of::<i32>(), Self::I32),
            (TypeId::of::<u64>(), Self::U64),
            (TypeId::of::<i64>(), Self::I64),
            (TypeId::of::<u128>(), Self::U128),
            (TypeId::of::<i128>(), Self::I128),
            (TypeId::of::<usize>(), Self::Usize),
            (TypeId::of::<isize>(), Self::Isize),
            (TypeId::of::<f16>(), Self::F16),
            (TypeId::of::<f32>(), Self::F32),
            (TypeId::of::<f64>(), Self::F64),
        ];
        table
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|&(_, kind)| kind)
    }

    /// Size of one lane in bytes.
    #[must_use]
    pub const fn size_bytes(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 | Self::F16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 => 8,
            Self::U128 | Self::I128 => 16,
            Self::Usize | Self::Isize => std::mem::size_of::<usize>(),
        }
    }

    /// Size of one lane in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.size_bytes() as u32 * 8
    }

    /// Whether the kind is a floating-point kind.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F16 | Self::F32 | Self::F64)
    }

    /// Whether the kind is an integer kind.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        !self.is_float()
    }

    /// Whether the kind can represent negative values.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::I128
                | Self::Isize
                | Self::F16
                | Self::F32
                | Self::F64
        )
    }

    /// Rust name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::I64 => "i64",
            Self::U128 => "u128",
            Self::I128 => "i128",
            Self::Usize => "usize",
            Self::Isize => "isize",
            Self::F16 => "f16",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rounding modes for [`Element::round_lane`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Nearest, ties to even.
    #[default]
    ToEven,
    /// Nearest, ties away from zero.
    AwayFromZero,
    /// Toward zero.
    ToZero,
    /// Toward negative infinity.
    ToNegativeInfinity,
    /// Toward positive infinity.
    ToPositiveInfinity,
}

/// A primitive numeric type that can be stored in vector lanes.
///
/// Integer arithmetic wraps. Float arithmetic follows IEEE 754. The
/// classification predicates give integers the obvious answers: never NaN,
/// infinite or subnormal; always finite and integral; normal iff non-zero;
/// unsigned values are positive and never negative.
pub trait Element:
    sealed::Sealed
    + Pod
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + fmt::LowerExp
    + Send
    + Sync
    + 'static
{
    /// Kind tag.
    const KIND: ElementKind;
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Smallest finite value.
    const MIN: Self;
    /// Largest finite value.
    const MAX: Self;

    /// The value with every bit set; the `true` lane of comparison masks.
    #[must_use]
    fn all_bits_set() -> Self {
        let mut value = Self::zeroed();
        bytemuck::bytes_of_mut(&mut value).fill(0xFF);
        value
    }

    /// Whether every bit of the value is set.
    fn is_all_bits_set(self) -> bool {
        bytemuck::bytes_of(&self).iter().all(|&b| b == 0xFF)
    }

    /// Comparison mask lane for `condition`.
    #[must_use]
    fn mask(condition: bool) -> Self {
        if condition {
            Self::all_bits_set()
        } else {
            Self::zeroed()
        }
    }

    /// Sum; wraps for integers.
    #[must_use]
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Difference; wraps for integers.
    #[must_use]
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Product; wraps for integers.
    #[must_use]
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Negation; `MIN` maps to itself and unsigned values wrap.
    #[must_use]
    fn wrapping_neg(self) -> Self;

    /// Quotient, or `None` when an integer divisor is zero. `MIN / -1` wraps.
    fn checked_lane_div(self, rhs: Self) -> Option<Self>;

    /// Whether dividing by this value fails.
    fn is_zero_divisor(self) -> bool;

    /// Convert a lane index; integers wrap, floats round to nearest.
    fn from_usize_wrapping(n: usize) -> Self;

    /// Left shift by `n` masked to the bit width. Floats shift their bit pattern.
    #[must_use]
    fn shl_lane(self, n: u32) -> Self;
    /// Sign-extending right shift for signed kinds, zero-filling for unsigned.
    #[must_use]
    fn shr_arith_lane(self, n: u32) -> Self;
    /// Zero-filling right shift for every kind.
    #[must_use]
    fn shr_logical_lane(self, n: u32) -> Self;

    /// Object equality: like `==`, but NaN equals NaN.
    fn equivalent(self, other: Self) -> bool;

    /// Hash consistent with [`Element::equivalent`].
    fn hash_lane<H: Hasher>(self, state: &mut H);

    /// Order by absolute value. `None` when either side is NaN; `MIN` of a
    /// signed kind is the largest magnitude.
    fn magnitude_cmp(self, other: Self) -> Option<Ordering>;

    /// Absolute value; integer `MIN` wraps to itself.
    #[must_use]
    fn abs_lane(self) -> Self;

    /// Square root; integers go through `f64` and truncate.
    #[must_use]
    fn sqrt_lane(self) -> Self;

    /// Round to an integral value. Identity on integers.
    #[must_use]
    fn round_lane(self, mode: RoundingMode) -> Self;

    /// NaN test.
    fn is_nan(self) -> bool;
    /// Neither NaN nor infinite.
    fn is_finite(self) -> bool;
    /// Either infinity.
    fn is_infinity(self) -> bool;
    /// Positive infinity.
    fn is_positive_infinity(self) -> bool;
    /// Negative infinity.
    fn is_negative_infinity(self) -> bool;
    /// Sign bit set (floats) or below zero (integers).
    fn is_negative(self) -> bool;
    /// Complement of [`Element::is_negative`].
    fn is_positive(self) -> bool;
    /// Equal to zero; both float zeros qualify.
    fn is_zero(self) -> bool;
    /// Finite and integral.
    fn is_integer(self) -> bool;
    /// Integral and even.
    fn is_even_integer(self) -> bool;
    /// Integral and odd.
    fn is_odd_integer(self) -> bool;
    /// Normal floats; non-zero integers.
    fn is_normal(self) -> bool;
    /// Subnormal floats; never for integers.
    fn is_subnormal(self) -> bool;
}

/// Integer element kinds.
pub trait IntElement: Element + Ord + Eq + Hash {
    /// Sum clamped to the kind's range.
    #[must_use]
    fn saturating_add_lane(self, rhs: Self) -> Self;
    /// Difference clamped to the kind's range.
    #[must_use]
    fn saturating_sub_lane(self, rhs: Self) -> Self;
}

/// Floating-point element kinds.
pub trait FloatElement: Element {
    /// Not-a-number.
    const NAN: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;
    /// Negative zero.
    const NEG_ZERO: Self;

    /// `e^x`.
    #[must_use]
    fn exp_lane(self) -> Self;
    /// Natural logarithm.
    #[must_use]
    fn ln_lane(self) -> Self;
    /// Base-2 logarithm.
    #[must_use]
    fn log2_lane(self) -> Self;
    /// Sine.
    #[must_use]
    fn sin_lane(self) -> Self;
    /// Cosine.
    #[must_use]
    fn cos_lane(self) -> Self;
    /// `sqrt(x^2 + y^2)` without intermediate overflow.
    #[must_use]
    fn hypot_lane(self, other: Self) -> Self;
    /// `self * a + b` with a single rounding.
    #[must_use]
    fn mul_add_lane(self, a: Self, b: Self) -> Self;
    /// `self * a + b`, two roundings.
    #[must_use]
    fn mul_add_unfused_lane(self, a: Self, b: Self) -> Self;
    /// Magnitude of `self` with the sign of `sign`.
    #[must_use]
    fn copysign_lane(self, sign: Self) -> Self;
    /// Degrees to radians.
    #[must_use]
    fn to_radians_lane(self) -> Self;
    /// Radians to degrees.
    #[must_use]
    fn to_degrees_lane(self) -> Self;
    /// `self * (1 - t) + other * t`.
    #[must_use]
    fn lerp_lane(self, other: Self, t: Self) -> Self;
}

macro_rules! int_element {
    ($t:ty, $unsigned:ty, $kind:ident, signed) => {
        int_element!(@impl $t, $unsigned, $kind);

        impl Element for $t {
            int_element!(@common $t, $unsigned, $kind);

            fn magnitude_cmp(self, other: Self) -> Option<Ordering> {
                Some(self.unsigned_abs().cmp(&other.unsigned_abs()))
            }

            fn abs_lane(self) -> Self {
                <$t>::wrapping_abs(self)
            }

            fn is_negative(self) -> bool {
                self < 0
            }

            fn is_positive(self) -> bool {
                self >= 0
            }
        }
    };
    ($t:ty, $unsigned:ty, $kind:ident, unsigned) => {
        int_element!(@impl $t, $unsigned, $kind);

        impl Element for $t {
            int_element!(@common $t, $unsigned, $kind);

            fn magnitude_cmp(self, other: Self) -> Option<Ordering> {
                Some(self.cmp(&other))
            }

            fn abs_lane(self) -> Self {
                self
            }

            fn is_negative(self) -> bool {
                false
            }

            fn is_positive(self) -> bool {
                true
            }
        }
    };
    (@impl $t:ty, $unsigned:ty, $kind:ident) => {
        impl sealed::Sealed for $t {}

        impl IntElement for $t {
            #[inline]
            fn saturating_add_lane(self, rhs: Self) -> Self {
                <$t>::saturating_add(self, rhs)
            }

            #[inline]
            fn saturating_sub_lane(self, rhs: Self) -> Self {
                <$t>::saturating_sub(self, rhs)
            }
        }
    };
    (@common $t:ty, $unsigned:ty, $kind:ident) => {
        const KIND: ElementKind = ElementKind::$kind;
        const ZERO: Self = 0;
        const ONE: Self = 1;
        const MIN: Self = <$t>::MIN;
        const MAX: Self = <$t>::MAX;

        #[inline]
        fn wrapping_add(self, rhs: Self) -> Self {
            <$t>::wrapping_add(self, rhs)
        }

        #[inline]
        fn wrapping_sub(self, rhs: Self) -> Self {
            <$t>::wrapping_sub(self, rhs)
        }

        #[inline]
        fn wrapping_mul(self, rhs: Self) -> Self {
            <$t>::wrapping_mul(self, rhs)
        }

        #[inline]
        fn wrapping_neg(self) -> Self {
            <$t>::wrapping_neg(self)
        }

        #[inline]
        fn checked_lane_div(self, rhs: Self) -> Option<Self> {
            if rhs == 0 {
                None
            } else {
                Some(<$t>::wrapping_div(self, rhs))
            }
        }

        #[inline]
        fn is_zero_divisor(self) -> bool {
            self == 0
        }

        #[inline]
        fn from_usize_wrapping(n: usize) -> Self {
            n as $t
        }

        #[inline]
        fn shl_lane(self, n: u32) -> Self {
            <$t>::wrapping_shl(self, n)
        }

        #[inline]
        fn shr_arith_lane(self, n: u32) -> Self {
            <$t>::wrapping_shr(self, n)
        }

        #[inline]
        fn shr_logical_lane(self, n: u32) -> Self {
            <$unsigned>::wrapping_shr(self as $unsigned, n) as $t
        }

        #[inline]
        fn equivalent(self, other: Self) -> bool {
            self == other
        }

        fn hash_lane<H: Hasher>(self, state: &mut H) {
            Hash::hash(&self, state);
        }

        fn sqrt_lane(self) -> Self {
            (self as f64).sqrt() as $t
        }

        #[inline]
        fn round_lane(self, _mode: RoundingMode) -> Self {
            self
        }

        fn is_nan(self) -> bool {
            false
        }

        fn is_finite(self) -> bool {
            true
        }

        fn is_infinity(self) -> bool {
            false
        }

        fn is_positive_infinity(self) -> bool {
            false
        }

        fn is_negative_infinity(self) -> bool {
            false
        }

        fn is_zero(self) -> bool {
            self == 0
        }

        fn is_integer(self) -> bool {
            true
        }

        fn is_even_integer(self) -> bool {
            self & 1 == 0
        }

        fn is_odd_integer(self) -> bool {
            self & 1 != 0
        }

        fn is_normal(self) -> bool {
            self != 0
        }

        fn is_subnormal(self) -> bool {
            false
        }
    };
}

int_element!(u8, u8, U8, unsigned);
int_element!(i8, u8, I8, signed);
int_element!(u16, u16, U16, unsigned);
int_element!(i16, u16, I16, signed);
int_element!(u32, u32, U32, unsigned);
int_element!(i32, u32, I32, signed);
int_element!(u64, u64, U64, unsigned);
int_element!(i64, u64, I64, signed);
int_element!(u128, u128, U128, unsigned);
int_element!(i128, u128, I128, signed);
int_element!(usize, usize, Usize, unsigned);
int_element!(isize, usize, Isize, signed);

macro_rules! float_element {
    ($t:ty, $bits:ty, $signed_bits:ty, $kind:ident) => {
        impl sealed::Sealed for $t {}

        impl Element for $t {
            const KIND: ElementKind = ElementKind::$kind;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn wrapping_neg(self) -> Self {
                -self
            }

            #[inline]
            fn checked_lane_div(self, rhs: Self) -> Option<Self> {
                Some(self / rhs)
            }

            #[inline]
            fn is_zero_divisor(self) -> bool {
                false
            }

            #[inline]
            fn from_usize_wrapping(n: usize) -> Self {
                n as $t
            }

            fn shl_lane(self, n: u32) -> Self {
                <$t>::from_bits(self.to_bits().wrapping_shl(n))
            }

            fn shr_arith_lane(self, n: u32) -> Self {
                <$t>::from_bits((self.to_bits() as $signed_bits).wrapping_shr(n) as $bits)
            }

            fn shr_logical_lane(self, n: u32) -> Self {
                <$t>::from_bits(self.to_bits().wrapping_shr(n))
            }

            #[inline]
            fn equivalent(self, other: Self) -> bool {
                self == other || (self.is_nan() && other.is_nan())
            }

            fn hash_lane<H: Hasher>(self, state: &mut H) {
                let bits = if self.is_nan() {
                    <$t>::NAN.to_bits()
                } else if self == 0.0 {
                    0
                } else {
                    self.to_bits()
                };
                bits.hash(state);
            }

            fn magnitude_cmp(self, other: Self) -> Option<Ordering> {
                self.abs().partial_cmp(&other.abs())
            }

            #[inline]
            fn abs_lane(self) -> Self {
                self.abs()
            }

            #[inline]
            fn sqrt_lane(self) -> Self {
                self.sqrt()
            }

            fn round_lane(self, mode: RoundingMode) -> Self {
                match mode {
                    RoundingMode::ToEven => self.round_ties_even(),
                    RoundingMode::AwayFromZero => self.round(),
                    RoundingMode::ToZero => self.trunc(),
                    RoundingMode::ToNegativeInfinity => self.floor(),
                    RoundingMode::ToPositiveInfinity => self.ceil(),
                }
            }

            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            fn is_infinity(self) -> bool {
                <$t>::is_infinite(self)
            }

            fn is_positive_infinity(self) -> bool {
                self == <$t>::INFINITY
            }

            fn is_negative_infinity(self) -> bool {
                self == <$t>::NEG_INFINITY
            }

            fn is_negative(self) -> bool {
                self.is_sign_negative()
            }

            fn is_positive(self) -> bool {
                self.is_sign_positive()
            }

            fn is_zero(self) -> bool {
                self == 0.0
            }

            fn is_integer(self) -> bool {
                <$t>::is_finite(self) && self.trunc() == self
            }

            fn is_even_integer(self) -> bool {
                Element::is_integer(self) && self % 2.0 == 0.0
            }

            fn is_odd_integer(self) -> bool {
                Element::is_integer(self) && (self % 2.0).abs() == 1.0
            }

            fn is_normal(self) -> bool {
                <$t>::is_normal(self)
            }

            fn is_subnormal(self) -> bool {
                <$t>::is_subnormal(self)
            }
        }

        impl FloatElement for $t {
            const NAN: Self = <$t>::NAN;
            const INFINITY: Self = <$t>::INFINITY;
            const NEG_INFINITY: Self = <$t>::NEG_INFINITY;
            const NEG_ZERO: Self = -0.0;

            fn exp_lane(self) -> Self {
                self.exp()
            }

            fn ln_lane(self) -> Self {
                self.ln()
            }

            fn log2_lane(self) -> Self {
                self.log2()
            }

            fn sin_lane(self) -> Self {
                self.sin()
            }

            fn cos_lane(self) -> Self {
                self.cos()
            }

            fn hypot_lane(self, other: Self) -> Self {
                self.hypot(other)
            }

            fn mul_add_lane(self, a: Self, b: Self) -> Self {
                self.mul_add(a, b)
            }

            fn mul_add_unfused_lane(self, a: Self, b: Self) -> Self {
                self * a + b
            }

            fn copysign_lane(self, sign: Self) -> Self {
                self.copysign(sign)
            }

            fn to_radians_lane(self) -> Self {
                self.to_radians()
            }

            fn to_degrees_lane(self) -> Self {
                self.to_degrees()
            }

            fn lerp_lane(self, other: Self, t: Self) -> Self {
                self * (1.0 - t) + other * t
            }
        }
    };
}

float_element!(f32, u32, i32, F32);
float_element!(f64, u64, i64, F64);

// f16 arithmetic goes through f32, which rounds correctly for the basic
// operations and square root.
const F16_EXP_MASK: u16 = 0x7C00;
const F16_MANTISSA_MASK: u16 = 0x03FF;

#[inline]
fn via_f32(x: f16, op: impl FnOnce(f32) -> f32) -> f16 {
    f16::from_f32(op(x.to_f32()))
}

impl sealed::Sealed for f16 {}

impl Element for f16 {
    const KIND: ElementKind = ElementKind::F16;
    const ZERO: Self = f16::ZERO;
    const ONE: Self = f16::ONE;
    const MIN: Self = f16::MIN;
    const MAX: Self = f16::MAX;

    fn wrapping_add(self, rhs: Self) -> Self {
        via_f32(self, |x| x + rhs.to_f32())
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        via_f32(self, |x| x - rhs.to_f32())
    }

    fn wrapping_mul(self, rhs: Self) -> Self {
        via_f32(self, |x| x * rhs.to_f32())
    }

    fn wrapping_neg(self) -> Self {
        f16::from_bits(self.to_bits() ^ 0x8000)
    }

    fn checked_lane_div(self, rhs: Self) -> Option<Self> {
        Some(via_f32(self, |x| x / rhs.to_f32()))
    }

    fn is_zero_divisor(self) -> bool {
        false
    }

    fn from_usize_wrapping(n: usize) -> Self {
        f16::from_f64(n as f64)
    }

    fn shl_lane(self, n: u32) -> Self {
        f16::from_bits(self.to_bits().wrapping_shl(n))
    }

    fn shr_arith_lane(self, n: u32) -> Self {
        f16::from_bits((self.to_bits() as i16).wrapping_shr(n) as u16)
    }

    fn shr_logical_lane(self, n: u32) -> Self {
        f16::from_bits(self.to_bits().wrapping_shr(n))
    }

    fn equivalent(self, other: Self) -> bool {
        self == other || (Element::is_nan(self) && Element::is_nan(other))
    }

    fn hash_lane<H: Hasher>(self, state: &mut H) {
        let bits = if Element::is_nan(self) {
            f16::NAN.to_bits()
        } else if self.to_bits() & 0x7FFF == 0 {
            0
        } else {
            self.to_bits()
        };
        bits.hash(state);
    }

    fn magnitude_cmp(self, other: Self) -> Option<Ordering> {
        self.abs_lane().partial_cmp(&other.abs_lane())
    }

    fn abs_lane(self) -> Self {
        f16::from_bits(self.to_bits() & 0x7FFF)
    }

    fn sqrt_lane(self) -> Self {
        via_f32(self, f32::sqrt)
    }

    fn round_lane(self, mode: RoundingMode) -> Self {
        via_f32(self, |x| x.round_lane(mode))
    }

    fn is_nan(self) -> bool {
        let bits = self.to_bits();
        bits & F16_EXP_MASK == F16_EXP_MASK && bits & F16_MANTISSA_MASK != 0
    }

    fn is_finite(self) -> bool {
        self.to_bits() & F16_EXP_MASK != F16_EXP_MASK
    }

    fn is_infinity(self) -> bool {
        self.to_bits() & 0x7FFF == F16_EXP_MASK
    }

    fn is_positive_infinity(self) -> bool {
        self.to_bits() == F16_EXP_MASK
    }

    fn is_negative_infinity(self) -> bool {
        self.to_bits() == 0xFC00
    }

    fn is_negative(self) -> bool {
        self.to_bits() & 0x8000 != 0
    }

    fn is_positive(self) -> bool {
        !Element::is_negative(self)
    }

    fn is_zero(self) -> bool {
        self.to_bits() & 0x7FFF == 0
    }

    fn is_integer(self) -> bool {
        Element::is_integer(self.to_f32())
    }

    fn is_even_integer(self) -> bool {
        Element::is_even_integer(self.to_f32())
    }

    fn is_odd_integer(self) -> bool {
        Element::is_odd_integer(self.to_f32())
    }

    fn is_normal(self) -> bool {
        let exp = self.to_bits() & F16_EXP_MASK;
        exp != 0 && exp != F16_EXP_MASK
    }

    fn is_subnormal(self) -> bool {
        let bits = self.to_bits();
        bits & F16_EXP_MASK == 0 && bits & F16_MANTISSA_MASK != 0
    }
}

impl FloatElement for f16 {
    const NAN: Self = f16::NAN;
    const INFINITY: Self = f16::INFINITY;
    const NEG_INFINITY: Self = f16::NEG_INFINITY;
    const NEG_ZERO: Self = f16::NEG_ZERO;

    fn exp_lane(self) -> Self {
        via_f32(self, f32::exp)
    }

    fn ln_lane(self) -> Self {
        via_f32(self, f32::ln)
    }

    fn log2_lane(self) -> Self {
        via_f32(self, f32::log2)
    }

    fn sin_lane(self) -> Self {
        via_f32(self, f32::sin)
    }

    fn cos_lane(self) -> Self {
        via_f32(self, f32::cos)
    }

    fn hypot_lane(self, other: Self) -> Self {
        via_f32(self, |x| x.hypot(other.to_f32()))
    }

    fn mul_add_lane(self, a: Self, b: Self) -> Self {
        via_f32(self, |x| x.mul_add(a.to_f32(), b.to_f32()))
    }

    fn mul_add_unfused_lane(self, a: Self, b: Self) -> Self {
        self.wrapping_mul(a).wrapping_add(b)
    }

    fn copysign_lane(self, sign: Self) -> Self {
        f16::from_bits((self.to_bits() & 0x7FFF) | (sign.to_bits() & 0x8000))
    }

    fn to_radians_lane(self) -> Self {
        via_f32(self, f32::to_radians)
    }

    fn to_degrees_lane(self) -> Self {
        via_f32(self, f32::to_degrees)
    }

    fn lerp_lane(self, other: Self, t: Self) -> Self {
        via_f32(self, |x| x.lerp_lane(other.to_f32(), t.to_f32()))
    }
}
