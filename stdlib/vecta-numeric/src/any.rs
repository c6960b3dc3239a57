//! Type-erased vectors.
//!
//! Generic code that only knows `T: 'static` cannot name `Vector<T>`
//! without an [`Element`] bound. [`AnyVector`] carries the element kind at
//! runtime instead, and rejects unsupported types with
//! [`VectorError::NotSupportedKind`] at construction.

use std::any::Any;
use std::fmt;

use half::f16;
use tracing::trace;

use crate::element::{Element, ElementKind};
use crate::error::{VectorError, VectorResult};
use crate::storage::LaneBlock;
use crate::vector::Vector;

macro_rules! any_vector {
    ($($variant:ident => $t:ty),* $(,)?) => {
        /// A vector whose element kind is known only at runtime.
        #[derive(Clone, Copy, PartialEq, Hash)]
        pub enum AnyVector {
            $(
                #[doc = concat!("Lanes of `", stringify!($t), "`.")]
                $variant(Vector<$t>),
            )*
        }

        impl AnyVector {
            /// Every lane set to `value`.
            ///
            /// # Errors
            ///
            /// [`VectorError::NotSupportedKind`] if `T` is not an element kind.
            pub fn splat<T: Any>(value: T) -> VectorResult<Self> {
                let value: &dyn Any = &value;
                $(
                    if let Some(&v) = value.downcast_ref::<$t>() {
                        return Ok(Self::$variant(Vector::splat(v)));
                    }
                )*
                Err(not_supported::<T>())
            }

            /// Element kind of the lanes.
            #[must_use]
            pub fn kind(&self) -> ElementKind {
                match self {
                    $(Self::$variant(_) => ElementKind::$variant,)*
                }
            }

            fn block(&self) -> &LaneBlock {
                match self {
                    $(Self::$variant(v) => v.block(),)*
                }
            }

            fn from_block(kind: ElementKind, block: LaneBlock) -> Self {
                match kind {
                    $(ElementKind::$variant => Self::$variant(Vector::from_block(block)),)*
                }
            }
        }

        impl fmt::Display for AnyVector {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant(v) => fmt::Display::fmt(v, f),)*
                }
            }
        }

        impl fmt::Debug for AnyVector {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant(v) => fmt::Debug::fmt(v, f),)*
                }
            }
        }
    };
}

any_vector!(
    U8 => u8,
    I8 => i8,
    U16 => u16,
    I16 => i16,
    U32 => u32,
    I32 => i32,
    U64 => u64,
    I64 => i64,
    U128 => u128,
    I128 => i128,
    Usize => usize,
    Isize => isize,
    F16 => f16,
    F32 => f32,
    F64 => f64,
);

fn not_supported<T>() -> VectorError {
    let type_name = std::any::type_name::<T>();
    trace!(type_name, "unsupported vector element kind");
    VectorError::NotSupportedKind { type_name }
}

impl AnyVector {
    /// Number of lanes.
    #[must_use]
    pub fn count(&self) -> usize {
        LaneBlock::width() / self.kind().size_bytes()
    }

    /// Raw lane bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.block().bytes()
    }

    /// The same bytes viewed as lanes of `U`.
    ///
    /// # Errors
    ///
    /// [`VectorError::NotSupportedKind`] if `U` is not an element kind.
    pub fn reinterpret_as<U: Any>(&self) -> VectorResult<Self> {
        let kind = ElementKind::of::<U>().ok_or_else(not_supported::<U>)?;
        Ok(Self::from_block(kind, *self.block()))
    }

    /// The typed vector, if the kind matches.
    #[must_use]
    pub fn downcast<T: Element>(&self) -> Option<Vector<T>> {
        (self.kind() == T::KIND).then(|| Vector::from_block(*self.block()))
    }
}

impl<T: Element> From<Vector<T>> for AnyVector {
    fn from(v: Vector<T>) -> Self {
        Self::from_block(T::KIND, *v.block())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    #[derive(Clone, Copy)]
    struct Rgb(u8, u8, u8);

    #[test]
    fn test_splat_supported() {
        let v = AnyVector::splat(2.5f32).unwrap();
        assert_eq!(v.kind(), ElementKind::F32);
        assert_eq!(v.count(), Vector::<f32>::count());
        assert_eq!(v.downcast::<f32>(), Some(Vector::splat(2.5)));
        assert_eq!(v.downcast::<u32>(), None);
    }

    #[test]
    fn test_splat_unsupported() {
        assert_eq!(
            AnyVector::splat('x'),
            Err(VectorError::NotSupportedKind { type_name: "char" })
        );
        assert!(AnyVector::splat(true).is_err());
        assert!(AnyVector::splat(Rgb(1, 2, 3)).is_err());
    }

    #[test]
    fn test_reinterpret_as() {
        let v = AnyVector::splat(1.0f32).unwrap();
        let bits = v.reinterpret_as::<u32>().unwrap();
        assert_eq!(bits.downcast::<u32>(), Some(Vector::splat(0x3F80_0000)));
        assert_eq!(bits.as_bytes(), v.as_bytes());

        assert!(matches!(
            v.reinterpret_as::<bool>(),
            Err(VectorError::NotSupportedKind { type_name: "bool" })
        ));
    }

    #[test]
    fn test_from_typed() {
        let any = AnyVector::from(Vector::<i16>::indices());
        assert_eq!(any.kind(), ElementKind::I16);
        assert_eq!(any.to_string(), Vector::<i16>::indices().to_string());
    }
}
