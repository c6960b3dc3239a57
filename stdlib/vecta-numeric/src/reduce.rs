//! Horizontal reductions and lane search.
//!
//! Lane search compares with IEEE `==`, so searching for NaN never finds
//! anything. The `*_where_all_bits_set` forms look for mask lanes instead
//! of a value, which is how NaN-patterned masks are found.

use crate::element::Element;
use crate::vector::Vector;

impl<T: Element> Vector<T> {
    /// Sum of lane-wise products, accumulated in `T` from lane 0 upward.
    #[must_use]
    pub fn dot(self, other: Self) -> T {
        self.iter()
            .zip(other.iter())
            .fold(T::ZERO, |acc, (a, b)| acc.wrapping_add(a.wrapping_mul(b)))
    }

    /// Sum of all lanes, accumulated in `T` from lane 0 upward.
    #[must_use]
    pub fn sum(self) -> T {
        self.iter().fold(T::ZERO, T::wrapping_add)
    }

    /// Number of lanes equal to `value`.
    #[must_use]
    pub fn count_of(self, value: T) -> usize {
        self.iter().filter(|&x| x == value).count()
    }

    /// First lane equal to `value`.
    #[must_use]
    pub fn index_of(self, value: T) -> Option<usize> {
        self.iter().position(|x| x == value)
    }

    /// Last lane equal to `value`.
    #[must_use]
    pub fn last_index_of(self, value: T) -> Option<usize> {
        self.iter().rposition(|x| x == value)
    }

    /// Every lane equals `value`.
    #[must_use]
    pub fn all(self, value: T) -> bool {
        self.iter().all(|x| x == value)
    }

    /// Some lane equals `value`.
    #[must_use]
    pub fn any(self, value: T) -> bool {
        self.iter().any(|x| x == value)
    }

    /// No lane equals `value`.
    #[must_use]
    pub fn none(self, value: T) -> bool {
        !self.any(value)
    }

    /// Number of lanes with every bit set.
    #[must_use]
    pub fn count_where_all_bits_set(self) -> usize {
        self.iter().filter(|&x| x.is_all_bits_set()).count()
    }

    /// First lane with every bit set.
    #[must_use]
    pub fn index_of_where_all_bits_set(self) -> Option<usize> {
        self.iter().position(T::is_all_bits_set)
    }

    /// Last lane with every bit set.
    #[must_use]
    pub fn last_index_of_where_all_bits_set(self) -> Option<usize> {
        self.iter().rposition(T::is_all_bits_set)
    }

    /// Every lane has every bit set.
    #[must_use]
    pub fn all_where_all_bits_set(self) -> bool {
        self.iter().all(T::is_all_bits_set)
    }

    /// Some lane has every bit set.
    #[must_use]
    pub fn any_where_all_bits_set(self) -> bool {
        self.iter().any(T::is_all_bits_set)
    }

    /// No lane has every bit set.
    #[must_use]
    pub fn none_where_all_bits_set(self) -> bool {
        !self.any_where_all_bits_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_sum() {
        let v = Vector::<i32>::create_sequence(0, 2);
        let count = Vector::<i32>::count() as i32;
        assert_eq!(v.sum(), count * (count - 1));
    }

    #[test]
    fn test_dot_wraps_in_element_type() {
        let v = Vector::splat(16u8);
        let expected = (Vector::<u8>::count() as u32 * 256 % 256) as u8;
        assert_eq!(v.dot(v), expected);

        let a = Vector::<f64>::indices();
        let ones = Vector::one();
        assert_eq!(a.dot(ones), a.sum());
    }

    #[test]
    fn test_search() {
        let v = Vector::<u32>::indices().with_element(2, 0).unwrap();
        assert_eq!(v.count_of(0), 2);
        assert_eq!(v.index_of(0), Some(0));
        assert_eq!(v.last_index_of(0), Some(2));
        assert_eq!(v.index_of(9999), None);
        assert!(v.any(1));
        assert!(v.none(9999));
        assert!(!v.all(0));
        assert!(Vector::splat(7u32).all(7));
    }

    #[test]
    fn test_nan_is_never_found() {
        let v = Vector::splat(f32::NAN);
        assert_eq!(v.count_of(f32::NAN), 0);
        assert_eq!(v.index_of(f32::NAN), None);
        assert!(v.none(f32::NAN));
        assert!(!v.all(f32::NAN));
    }

    #[test]
    fn test_all_bits_set_search() {
        let mask = Vector::<f32>::zero()
            .with_element(1, f32::from_bits(u32::MAX))
            .unwrap();
        assert_eq!(mask.count_where_all_bits_set(), 1);
        assert_eq!(mask.index_of_where_all_bits_set(), Some(1));
        assert_eq!(mask.last_index_of_where_all_bits_set(), Some(1));
        assert!(mask.any_where_all_bits_set());
        assert!(!mask.all_where_all_bits_set());
        assert!(!mask.none_where_all_bits_set());

        // A quiet NaN is not all bits set.
        assert!(Vector::splat(f32::NAN).none_where_all_bits_set());
        assert!(Vector::<i16>::all_bits_set().all_where_all_bits_set());
    }
}
