//! Vector behavior across every element kind
//!
//! Tests for Vector<T> operations including:
//! - Construction (splat, slices, sequences)
//! - Arithmetic wraparound and IEEE behavior
//! - Comparison masks and selection
//! - Reductions and lane search
//! - Object equality versus lane equality

use vecta_numeric::{f16, Element, IntElement, Vector, VectorError};

macro_rules! for_all_kinds {
    ($check:ident) => {
        $check::<u8>();
        $check::<i8>();
        $check::<u16>();
        $check::<i16>();
        $check::<u32>();
        $check::<i32>();
        $check::<u64>();
        $check::<i64>();
        $check::<u128>();
        $check::<i128>();
        $check::<usize>();
        $check::<isize>();
        $check::<f16>();
        $check::<f32>();
        $check::<f64>();
    };
}

macro_rules! for_int_kinds {
    ($check:ident) => {
        $check::<u8>();
        $check::<i8>();
        $check::<u16>();
        $check::<i16>();
        $check::<u32>();
        $check::<i32>();
        $check::<u64>();
        $check::<i64>();
        $check::<u128>();
        $check::<i128>();
        $check::<usize>();
        $check::<isize>();
    };
}

// ============================================================
// Construction Tests
// ============================================================

mod construction_tests {
    use super::*;

    fn check_count<T: Element>() {
        let count = Vector::<T>::count();
        assert!(count >= 1, "{}", T::KIND);
        assert_eq!(count * std::mem::size_of::<T>(), Vector::<T>::byte_width());
        assert_eq!(Vector::<T>::zero().as_slice().len(), count);
    }

    #[test]
    fn test_count_for_every_kind() {
        for_all_kinds!(check_count);
    }

    fn check_slice_round_trip<T: Element>() {
        let count = Vector::<T>::count();
        let values: Vec<T> = (0..count).map(T::from_usize_wrapping).collect();
        let v = Vector::from_slice(&values).unwrap();

        let mut out = vec![T::ZERO; count];
        v.copy_to(&mut out).unwrap();
        assert_eq!(out, values, "{}", T::KIND);
        assert_eq!(v, Vector::indices());
    }

    #[test]
    fn test_slice_round_trip() {
        for_all_kinds!(check_slice_round_trip);
    }

    fn check_from_slice_too_short<T: Element>() {
        let count = Vector::<T>::count();
        let values = vec![T::ONE; count];
        assert!(matches!(
            Vector::from_slice_at(&values, 1),
            Err(VectorError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_slice_too_short() {
        for_all_kinds!(check_from_slice_too_short);
    }

    #[test]
    fn test_try_from_slice() {
        let values = vec![3.0f32; Vector::<f32>::count()];
        let v = Vector::try_from(values.as_slice()).unwrap();
        assert_eq!(v, Vector::splat(3.0));
        let back: Vec<f32> = v.into();
        assert_eq!(back, values);
    }
}

// ============================================================
// Arithmetic Tests
// ============================================================

mod arithmetic_tests {
    use super::*;

    fn check_add_wraps<T: Element>() {
        let max = Vector::splat(T::MAX);
        let sum = max + Vector::one();
        if T::KIND.is_integer() {
            assert_eq!(sum, Vector::splat(T::MIN), "{}", T::KIND);
        } else {
            assert_eq!(sum, max, "{}", T::KIND);
        }
    }

    #[test]
    fn test_additive_wraparound() {
        for_all_kinds!(check_add_wraps);
    }

    fn check_identities<T: Element>() {
        let v = Vector::<T>::indices();
        assert_eq!(v + Vector::zero(), v);
        assert_eq!(v - v, Vector::zero());
        assert_eq!(v * Vector::one(), v);
        assert_eq!(-(-v), v);
        assert_eq!(v ^ v, Vector::zero());
        assert_eq!(!(!v), v);
    }

    #[test]
    fn test_identities() {
        for_all_kinds!(check_identities);
    }

    fn check_divide_by_zero<T: Element>() {
        let v = Vector::<T>::one();
        let result = v.checked_div(Vector::zero());
        if T::KIND.is_integer() {
            assert_eq!(result, Err(VectorError::DivideByZero));
        } else {
            let q = result.unwrap();
            assert!(q.iter().all(|x| x.is_positive_infinity()), "{}", T::KIND);
        }
    }

    #[test]
    fn test_divide_by_zero() {
        for_all_kinds!(check_divide_by_zero);
    }

    fn check_saturating<T: IntElement>() {
        let max = Vector::splat(T::MAX);
        assert_eq!(max.add_saturate(Vector::one()), max);
        let min = Vector::splat(T::MIN);
        assert_eq!(min.subtract_saturate(Vector::one()), min);
    }

    #[test]
    fn test_saturating_for_every_integer() {
        for_int_kinds!(check_saturating);
        assert_eq!(
            Vector::splat(250u8).add_saturate(Vector::splat(10))[0],
            255
        );
    }

    #[test]
    fn test_negative_zero_sum() {
        let v = Vector::splat(-0.0f64);
        // Accumulation starts at +0.0.
        assert!(v.sum().is_sign_positive());
    }
}

// ============================================================
// Comparison Tests
// ============================================================

mod comparison_tests {
    use super::*;

    fn check_sentinel<T: Element>() {
        let v = Vector::<T>::indices();
        let mask = v.equals(v);
        assert!(mask.all_where_all_bits_set(), "{}", T::KIND);
        assert!(mask.object_equals(Vector::all_bits_set()), "{}", T::KIND);
        assert!(v.greater_than(v).none_where_all_bits_set());
    }

    #[test]
    fn test_comparison_sentinel() {
        for_all_kinds!(check_sentinel);
    }

    #[test]
    fn test_select_by_mask() {
        let a = Vector::<f32>::indices();
        let b = Vector::splat(-1.0f32);
        let mask = a.less_than(Vector::splat(2.0));
        let picked = Vector::conditional_select(mask, a, b);
        assert_eq!(picked[0], 0.0);
        assert_eq!(picked[1], 1.0);
        assert_eq!(picked[2], -1.0);
    }
}

// ============================================================
// Equality Tests
// ============================================================

mod equality_tests {
    use super::*;

    const F32_NANS: [u32; 4] = [0xFFC0_0000, 0x7FC0_0000, 0xFF80_0001, 0x7F80_0001];
    const F64_NANS: [u64; 4] = [
        0xFFF8_0000_0000_0000,
        0x7FF8_0000_0000_0000,
        0xFFF0_0000_0000_0001,
        0x7FF0_0000_0000_0001,
    ];

    #[test]
    fn test_nan_pairs_f32() {
        for &x in &F32_NANS {
            for &y in &F32_NANS {
                let a = Vector::splat(f32::from_bits(x));
                let b = Vector::splat(f32::from_bits(y));
                assert!(a.object_equals(b), "{x:#x} vs {y:#x}");
                assert!(!(a == b), "{x:#x} vs {y:#x}");
                assert!(a != b, "{x:#x} vs {y:#x}");
                assert!(!a.equals_all(b));
            }
        }
    }

    #[test]
    fn test_nan_pairs_f64() {
        for &x in &F64_NANS {
            for &y in &F64_NANS {
                let a = Vector::splat(f64::from_bits(x));
                let b = Vector::splat(f64::from_bits(y));
                assert!(a.object_equals(b), "{x:#x} vs {y:#x}");
                assert!(!(a == b), "{x:#x} vs {y:#x}");
                assert!(a != b, "{x:#x} vs {y:#x}");
                assert!(!a.equals_any(b));
            }
        }
    }

    #[test]
    fn test_single_nan_lane_breaks_equality() {
        let v = Vector::<f64>::indices();
        let w = v.with_element(0, f64::NAN).unwrap();
        assert_eq!(v, v);
        assert_ne!(w, w);
        assert!(w.object_equals(w));
        assert!(!w.object_equals(v));
    }

    #[test]
    fn test_equality_is_lane_wise() {
        let v = Vector::<i32>::indices();
        let w = v.with_element(Vector::<i32>::count() - 1, -7).unwrap();
        assert_ne!(v, w);
        assert!(!v.equals_all(w));
        assert!(v.equals_any(w));
    }
}

// ============================================================
// Reduction Tests
// ============================================================

mod reduction_tests {
    use super::*;

    fn check_sum_and_dot<T: Element>() {
        let ones = Vector::<T>::one();
        let count = T::from_usize_wrapping(Vector::<T>::count());
        assert_eq!(ones.sum(), count, "{}", T::KIND);
        assert_eq!(ones.dot(ones), count, "{}", T::KIND);
    }

    #[test]
    fn test_sum_and_dot() {
        for_all_kinds!(check_sum_and_dot);
    }

    fn check_search<T: Element>() {
        let v = Vector::<T>::indices();
        let last = Vector::<T>::count() - 1;
        assert_eq!(v.index_of(T::ZERO), Some(0));
        assert_eq!(v.last_index_of(T::from_usize_wrapping(last)), Some(last));
        assert_eq!(v.count_of(T::ZERO), 1);
        assert!(v.any(T::ZERO));
        assert!(Vector::splat(T::ONE).all(T::ONE));
        assert!(Vector::<T>::zero().none(T::ONE));
    }

    #[test]
    fn test_search() {
        for_all_kinds!(check_search);
    }
}
