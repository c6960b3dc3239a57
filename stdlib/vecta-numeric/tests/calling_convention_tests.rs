//! Operator, method and function-pointer forms agree
//!
//! Every operator has a named free function in `vecta_numeric::ops`. Both
//! must produce the same lanes, including when the function is passed
//! around as a value.

use vecta_numeric::ops;
use vecta_numeric::{Element, Vector, VectorError};

type Binary<T> = fn(Vector<T>, Vector<T>) -> Vector<T>;

fn apply_all<T: Element>(a: Vector<T>, b: Vector<T>, table: &[(Binary<T>, Binary<T>)]) {
    for (i, (via_fn, via_operator)) in table.iter().enumerate() {
        // Bitwise entries can produce NaN patterns on float kinds.
        assert!(
            via_fn(a, b).object_equals(via_operator(a, b)),
            "entry {i} for {}",
            T::KIND
        );
    }
}

fn check_binary_forms<T: Element>() {
    let a = Vector::<T>::create_sequence(T::ONE, T::ONE);
    let b = Vector::<T>::indices();
    let table: [(Binary<T>, Binary<T>); 7] = [
        (ops::add, |x, y| x + y),
        (ops::subtract, |x, y| x - y),
        (ops::multiply, |x, y| x * y),
        (ops::bitwise_and, |x, y| x & y),
        (ops::bitwise_or, |x, y| x | y),
        (ops::xor, |x, y| x ^ y),
        (ops::and_not, |x, y| x & !y),
    ];
    apply_all(a, b, &table);
}

// ============================================================
// Binary Operator Tests
// ============================================================

#[test]
fn test_binary_forms_agree() {
    check_binary_forms::<u8>();
    check_binary_forms::<i16>();
    check_binary_forms::<u32>();
    check_binary_forms::<i64>();
    check_binary_forms::<i128>();
    check_binary_forms::<usize>();
    check_binary_forms::<vecta_numeric::f16>();
    check_binary_forms::<f32>();
    check_binary_forms::<f64>();
}

// ============================================================
// Unary and Scalar Tests
// ============================================================

#[test]
fn test_unary_forms_agree() {
    let v = Vector::<i32>::create_sequence(-5, 3);
    let negate: fn(Vector<i32>) -> Vector<i32> = ops::negate;
    let complement: fn(Vector<i32>) -> Vector<i32> = ops::ones_complement;
    assert_eq!(negate(v), -v);
    assert_eq!(complement(v), !v);
    assert_eq!(ops::multiply_scalar(v, 3), v * 3);
    assert_eq!(ops::multiply_scalar(v, 3), 3 * v);
}

#[test]
fn test_shift_forms_agree() {
    let v = Vector::<i16>::splat(-256);
    assert_eq!(ops::shift_left(v, 2), v << 2);
    assert_eq!(ops::shift_right_arithmetic(v, 4), v >> 4);
    assert_eq!(ops::shift_right_arithmetic(v, 4)[0], -16);
    assert_eq!(ops::shift_right_logical(v, 4)[0], ((-256i16 as u16) >> 4) as i16);
}

#[test]
fn test_saturating_forms_agree() {
    let a = Vector::splat(100i8);
    let b = Vector::splat(100i8);
    assert_eq!(ops::add_saturate(a, b), a.add_saturate(b));
    assert_eq!(ops::subtract_saturate(-a, b), (-a).subtract_saturate(b));
    assert_eq!(ops::add_saturate(a, b)[0], i8::MAX);
}

// ============================================================
// Division Tests
// ============================================================

#[test]
fn test_divide_forms_agree() {
    let a = Vector::<i32>::splat(i32::MIN);
    let b = Vector::splat(-1);
    assert_eq!(ops::divide(a, b), Ok(a / b));
    assert_eq!(ops::divide(a, b).map(|q| q[0]), Ok(i32::MIN));

    let f = Vector::splat(1.0f32);
    assert_eq!(ops::divide(f, Vector::splat(4.0)), Ok(f / 4.0));
}

#[test]
fn test_divide_function_reports_zero() {
    let a = Vector::<u64>::one();
    assert_eq!(ops::divide(a, Vector::zero()), Err(VectorError::DivideByZero));
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_divide_operator_panics_on_zero() {
    let _ = Vector::<u8>::one() / Vector::zero();
}
