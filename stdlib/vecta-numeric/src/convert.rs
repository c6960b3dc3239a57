//! Widening, narrowing and same-width numeric conversion.
//!
//! A vector of a wider kind holds half as many lanes, so widening produces
//! two vectors (lower half, upper half) and narrowing consumes two.
//!
//! | Conversion | Integers | Floats |
//! |------------|----------|--------|
//! | widen | zero- or sign-extend | exact |
//! | narrow | truncate | round to nearest even |
//! | narrow with saturation | clamp to range | n/a |
//! | float to integer | n/a | saturate, NaN to 0 |

use half::f16;

use crate::element::{Element, IntElement};
use crate::vector::Vector;

/// Kinds with a kind of twice the width.
pub trait Widen: Element {
    /// The double-width kind.
    type Wide: Element;

    /// Exact conversion to the wider kind.
    fn widen_lane(self) -> Self::Wide;
}

/// Kinds with a kind of half the width.
pub trait Narrow: Element {
    /// The half-width kind.
    type Narrow: Element;

    /// Truncating (integers) or rounding (floats) conversion.
    fn narrow_lane(self) -> Self::Narrow;
}

/// Integer kinds whose narrowing can clamp instead of truncate.
pub trait SaturatingNarrow: Narrow + IntElement {
    /// Conversion clamped to the range of the narrow kind.
    fn saturating_narrow_lane(self) -> Self::Narrow;
}

/// Same-width conversion between an integer kind and a float kind.
pub trait NumericCast<U: Element>: Element {
    /// Value conversion; float to integer saturates and maps NaN to 0.
    fn cast_lane(self) -> U;
}

macro_rules! int_pair {
    ($($narrow:ty => $wide:ty),*) => {$(
        impl Widen for $narrow {
            type Wide = $wide;

            #[inline]
            fn widen_lane(self) -> $wide {
                <$wide>::from(self)
            }
        }

        impl Narrow for $wide {
            type Narrow = $narrow;

            #[inline]
            fn narrow_lane(self) -> $narrow {
                self as $narrow
            }
        }

        impl SaturatingNarrow for $wide {
            #[inline]
            fn saturating_narrow_lane(self) -> $narrow {
                self.clamp(<$narrow>::MIN as $wide, <$narrow>::MAX as $wide) as $narrow
            }
        }
    )*};
}

int_pair!(
    u8 => u16, u16 => u32, u32 => u64, u64 => u128,
    i8 => i16, i16 => i32, i32 => i64, i64 => i128
);

impl Widen for f16 {
    type Wide = f32;

    fn widen_lane(self) -> f32 {
        self.to_f32()
    }
}

impl Widen for f32 {
    type Wide = f64;

    fn widen_lane(self) -> f64 {
        f64::from(self)
    }
}

impl Narrow for f32 {
    type Narrow = f16;

    fn narrow_lane(self) -> f16 {
        f16::from_f32(self)
    }
}

impl Narrow for f64 {
    type Narrow = f32;

    fn narrow_lane(self) -> f32 {
        self as f32
    }
}

macro_rules! as_cast {
    ($($from:ty => $to:ty),*) => {$(
        impl NumericCast<$to> for $from {
            #[inline]
            fn cast_lane(self) -> $to {
                self as $to
            }
        }
    )*};
}

as_cast!(
    i32 => f32, u32 => f32, i64 => f64, u64 => f64,
    f32 => i32, f32 => u32, f64 => i64, f64 => u64
);

impl NumericCast<f16> for i16 {
    fn cast_lane(self) -> f16 {
        f16::from_f32(f32::from(self))
    }
}

impl NumericCast<f16> for u16 {
    fn cast_lane(self) -> f16 {
        f16::from_f32(f32::from(self))
    }
}

impl NumericCast<i16> for f16 {
    fn cast_lane(self) -> i16 {
        self.to_f32() as i16
    }
}

impl NumericCast<u16> for f16 {
    fn cast_lane(self) -> u16 {
        self.to_f32() as u16
    }
}

impl<T: Widen> Vector<T> {
    /// Widen into `(lower half, upper half)`.
    ///
    /// ```
    /// use vecta_numeric::Vector;
    ///
    /// let (lo, hi) = Vector::<u8>::splat(200).widen();
    /// assert_eq!(lo[0], 200u16);
    /// assert_eq!(hi[0], 200u16);
    /// ```
    #[must_use]
    pub fn widen(self) -> (Vector<T::Wide>, Vector<T::Wide>) {
        (self.widen_lower(), self.widen_upper())
    }

    /// Widen the first half of the lanes.
    #[must_use]
    pub fn widen_lower(self) -> Vector<T::Wide> {
        Vector::from_fn(|i| self.as_slice()[i].widen_lane())
    }

    /// Widen the second half of the lanes.
    #[must_use]
    pub fn widen_upper(self) -> Vector<T::Wide> {
        let half = Self::count() / 2;
        Vector::from_fn(|i| self.as_slice()[half + i].widen_lane())
    }
}

impl<T: Narrow> Vector<T> {
    /// Narrow two vectors into one: `lower`'s lanes first, then `upper`'s.
    #[must_use]
    pub fn narrow(lower: Self, upper: Self) -> Vector<T::Narrow> {
        let n = Self::count();
        Vector::from_fn(|i| {
            let lane = if i < n {
                lower.as_slice()[i]
            } else {
                upper.as_slice()[i - n]
            };
            lane.narrow_lane()
        })
    }
}

impl<T: SaturatingNarrow> Vector<T> {
    /// Like [`Vector::narrow`], clamping out-of-range lanes.
    #[must_use]
    pub fn narrow_with_saturation(lower: Self, upper: Self) -> Vector<T::Narrow> {
        let n = Self::count();
        Vector::from_fn(|i| {
            let lane = if i < n {
                lower.as_slice()[i]
            } else {
                upper.as_slice()[i - n]
            };
            lane.saturating_narrow_lane()
        })
    }
}

impl<T: Element> Vector<T> {
    /// Same-width value conversion to `U`.
    #[must_use]
    pub fn convert<U: Element>(self) -> Vector<U>
    where
        T: NumericCast<U>,
    {
        self.map_to(T::cast_lane)
    }
}

macro_rules! named_convert {
    ($($from:ty => $name:ident -> $to:ty),* $(,)?) => {$(
        impl Vector<$from> {
            #[doc = concat!("Convert each lane to `", stringify!($to), "`.")]
            #[must_use]
            pub fn $name(self) -> Vector<$to> {
                self.convert()
            }
        }
    )*};
}

named_convert!(
    i32 => convert_to_f32 -> f32,
    u32 => convert_to_f32 -> f32,
    i64 => convert_to_f64 -> f64,
    u64 => convert_to_f64 -> f64,
    i16 => convert_to_f16 -> f16,
    u16 => convert_to_f16 -> f16,
);

impl Vector<f32> {
    /// Convert each lane to `i32`, saturating; NaN becomes 0.
    #[must_use]
    pub fn convert_to_i32(self) -> Vector<i32> {
        self.convert()
    }

    /// Convert each lane to `u32`, saturating; NaN becomes 0.
    #[must_use]
    pub fn convert_to_u32(self) -> Vector<u32> {
        self.convert()
    }
}

impl Vector<f64> {
    /// Convert each lane to `i64`, saturating; NaN becomes 0.
    #[must_use]
    pub fn convert_to_i64(self) -> Vector<i64> {
        self.convert()
    }

    /// Convert each lane to `u64`, saturating; NaN becomes 0.
    #[must_use]
    pub fn convert_to_u64(self) -> Vector<u64> {
        self.convert()
    }
}

impl Vector<f16> {
    /// Convert each lane to `i16`, saturating; NaN becomes 0.
    #[must_use]
    pub fn convert_to_i16(self) -> Vector<i16> {
        self.convert()
    }

    /// Convert each lane to `u16`, saturating; NaN becomes 0.
    #[must_use]
    pub fn convert_to_u16(self) -> Vector<u16> {
        self.convert()
    }
}
