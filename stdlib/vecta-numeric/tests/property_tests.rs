//! Property-based tests for vector operations
//!
//! Lane-wise operations are checked against the scalar operation applied
//! to each lane, using random lane contents.

use proptest::prelude::*;
use vecta_numeric::{Vector, VectorError};

fn lanes<T: vecta_numeric::Element + Arbitrary>() -> impl Strategy<Value = Vec<T>> {
    prop::collection::vec(any::<T>(), Vector::<T>::count())
}

fn vector<T: vecta_numeric::Element>(values: &[T]) -> Vector<T> {
    Vector::from_slice(values).unwrap()
}

// ============================================================
// Arithmetic Properties
// ============================================================

proptest! {
    #[test]
    fn prop_add_is_lanewise_wrapping(a in lanes::<i32>(), b in lanes::<i32>()) {
        let sum = vector(&a) + vector(&b);
        for i in 0..a.len() {
            prop_assert_eq!(sum[i], a[i].wrapping_add(b[i]));
        }
    }

    #[test]
    fn prop_add_commutes(a in lanes::<u16>(), b in lanes::<u16>()) {
        prop_assert_eq!(vector(&a) + vector(&b), vector(&b) + vector(&a));
    }

    #[test]
    fn prop_add_saturate_matches_scalar(a in lanes::<u8>(), b in lanes::<u8>()) {
        let sum = vector(&a).add_saturate(vector(&b));
        for i in 0..a.len() {
            prop_assert_eq!(sum[i], a[i].saturating_add(b[i]));
        }
    }

    #[test]
    fn prop_checked_div_rejects_any_zero_lane(a in lanes::<i64>(), b in lanes::<i64>()) {
        let result = vector(&a).checked_div(vector(&b));
        if b.contains(&0) {
            prop_assert_eq!(result, Err(VectorError::DivideByZero));
        } else {
            let q = result.unwrap();
            for i in 0..a.len() {
                prop_assert_eq!(q[i], a[i].wrapping_div(b[i]));
            }
        }
    }

    #[test]
    fn prop_sum_matches_iterator(a in lanes::<i8>()) {
        let expected = a.iter().fold(0i8, |acc, &x| acc.wrapping_add(x));
        prop_assert_eq!(vector(&a).sum(), expected);
    }

    #[test]
    fn prop_max_min_match_scalar(a in lanes::<i64>(), b in lanes::<i64>()) {
        let (va, vb) = (vector(&a), vector(&b));
        let (hi, lo) = (va.max(vb), va.min(vb));
        for i in 0..a.len() {
            prop_assert_eq!(hi[i], a[i].max(b[i]));
            prop_assert_eq!(lo[i], a[i].min(b[i]));
        }
    }
}

// ============================================================
// Comparison Properties
// ============================================================

proptest! {
    #[test]
    fn prop_mask_lanes_are_sentinels(a in lanes::<i16>(), b in lanes::<i16>()) {
        let mask = vector(&a).less_than(vector(&b));
        for i in 0..a.len() {
            let expected = if a[i] < b[i] { -1 } else { 0 };
            prop_assert_eq!(mask[i], expected);
        }
    }

    #[test]
    fn prop_select_by_comparison_is_max(a in lanes::<u32>(), b in lanes::<u32>()) {
        let (va, vb) = (vector(&a), vector(&b));
        let picked = Vector::conditional_select(va.greater_than(vb), va, vb);
        prop_assert_eq!(picked, va.max(vb));
    }

    #[test]
    fn prop_lane_equality_implies_object_equality(a in lanes::<f32>(), b in lanes::<f32>()) {
        let (va, vb) = (vector(&a), vector(&b));
        if va == vb {
            prop_assert!(va.object_equals(vb));
        }
        prop_assert!(va.object_equals(va));
        prop_assert_eq!(va == va, !a.iter().any(|x| x.is_nan()));
    }
}

// ============================================================
// Conversion Properties
// ============================================================

proptest! {
    #[test]
    fn prop_narrow_after_widen(a in lanes::<u8>()) {
        let v = vector(&a);
        let (lo, hi) = v.widen();
        prop_assert_eq!(Vector::narrow(lo, hi), v);
    }

    #[test]
    fn prop_copy_round_trip(a in lanes::<f64>()) {
        let mut out = vec![0.0; a.len()];
        vector(&a).copy_to(&mut out).unwrap();
        for i in 0..a.len() {
            prop_assert_eq!(out[i].to_bits(), a[i].to_bits());
        }
    }
}
