//! Portable generic SIMD vectors.
//!
//! [`Vector<T>`] is a fixed-size, `Copy` block of lanes of a primitive
//! numeric kind. Every vector in the process spans the same number of bytes
//! (16, 32 or 64), chosen once by `vecta-target` from the host vector unit,
//! so the lane count [`Vector::count`] depends only on `T`.
//!
//! # Layers
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`element`] | The closed set of element kinds and their per-lane capabilities |
//! | [`vector`] | Lane storage, construction, element access, formatting |
//! | [`ops`] | Arithmetic, bitwise, shift and saturating operators |
//! | [`compare`] | Sentinel-mask comparisons, selection, classification |
//! | [`math`] | Min/max families, rounding, transcendental functions |
//! | [`reduce`] | Dot, sum and lane search |
//! | [`convert`] | Widening, narrowing, same-width conversion |
//! | [`memory`] | Pointer and slice load/store |
//! | [`any`] | Type-erased vectors for runtime element kinds |
//!
//! # Example
//!
//! ```
//! use vecta_numeric::Vector;
//!
//! let a = Vector::<i32>::create_sequence(0, 2);
//! let b = Vector::splat(1);
//! let c = a + b;
//! assert_eq!(c[0], 1);
//! assert_eq!(c.count_of(3), 1);
//! ```
//!
//! # Equality
//!
//! `==` on vectors is lane-wise IEEE equality ([`Vector::equals_all`]), so
//! a vector with a NaN lane never equals anything. [`Vector::object_equals`]
//! treats any two NaN lanes as equal and is the relation [`Hash`] follows.
//! The mask-producing form is [`Vector::equals`].
//!
//! [`Hash`]: std::hash::Hash

#![warn(missing_docs)]
#![allow(unsafe_code)] // lane storage casts and raw-pointer I/O

mod accel;
pub mod any;
pub mod compare;
pub mod convert;
pub mod element;
pub mod error;
pub mod math;
pub mod memory;
pub mod ops;
pub mod reduce;
mod storage;
pub mod vector;

pub use any::AnyVector;
pub use convert::{Narrow, NumericCast, SaturatingNarrow, Widen};
pub use element::{Element, ElementKind, FloatElement, IntElement, RoundingMode};
pub use error::{VectorError, VectorResult};
pub use half::f16;
pub use vector::Vector;

/// Whether vector operations run on the hardware vector unit.
#[inline]
#[must_use]
pub fn is_hardware_accelerated() -> bool {
    vecta_target::is_hardware_accelerated()
}

/// Whether `T` is a supported element kind.
///
/// ```
/// assert!(vecta_numeric::is_supported::<f32>());
/// assert!(!vecta_numeric::is_supported::<char>());
/// ```
#[must_use]
pub fn is_supported<T: 'static>() -> bool {
    ElementKind::of::<T>().is_some()
}
