//! Sequence operations.
//!
//! [`SequenceExt`] adds the sequence methods to any `Vec<T>`. Method names are the snake_case
//! spellings registered as aliases in `agave_core::lang::surface::sequence_methods`, chosen so they
//! never shadow `Vec`/slice methods of the same base name.
//!
//! Element equality is `PartialEq`; for [`crate::Value`] that is strict equality.

/// Sequence methods for `Vec<T>`.
pub trait SequenceExt<T> {
    /// Return the first element for which `predicate` holds, scanning in order.
    fn find_item<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    /// Append every element of `other`, in order; returns `self` for chaining.
    fn extend_items<I>(&mut self, other: I) -> &mut Self
    where
        I: IntoIterator<Item = T>;

    /// Return true if any element equals `value`.
    fn includes(&self, value: &T) -> bool;

    /// Return a shallow copy.
    fn shallow_clone(&self) -> Vec<T>;

    /// Remove the first element equal to `value`; returns whether a removal occurred.
    fn remove_item(&mut self, value: &T) -> bool;

    /// Return the first `n` elements, clamped to the length.
    fn first_n(&self, n: usize) -> &[T];

    /// Return the last `n` elements, starting at `max(len - n, 0)`.
    fn last_n(&self, n: usize) -> &[T];
}

impl<T: PartialEq + Clone> SequenceExt<T> for Vec<T> {
    fn find_item<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|item| predicate(item))
    }

    fn extend_items<I>(&mut self, other: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(other);
        self
    }

    fn includes(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }

    fn shallow_clone(&self) -> Vec<T> {
        self.to_vec()
    }

    fn remove_item(&mut self, value: &T) -> bool {
        match self.iter().position(|item| item == value) {
            Some(index) => {
                self.remove(index);
                true
            }
            None => false,
        }
    }

    fn first_n(&self, n: usize) -> &[T] {
        &self[..n.min(self.len())]
    }

    fn last_n(&self, n: usize) -> &[T] {
        &self[self.len().saturating_sub(n)..]
    }
}

/// Convert a host count argument to an element count.
///
/// Truncates toward zero; negative and `NaN` counts become `0`.
pub fn count_from_f64(n: f64) -> usize {
    if n.is_nan() || n <= 0.0 {
        return 0;
    }
    // `as` saturates for values beyond usize::MAX.
    n.trunc() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn find_item_returns_first_match() {
        let v = vec![1, 2, 3];
        assert_eq!(v.find_item(|x| *x > 1), Some(&2));
        assert_eq!(v.find_item(|x| *x > 5), None);
    }

    #[test]
    fn find_item_short_circuits() {
        let v = vec![1, 2, 3, 4];
        let mut seen = Vec::new();
        let _ = v.find_item(|x| {
            seen.push(*x);
            *x == 2
        });
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn extend_items_appends_in_order_and_chains() {
        let mut v = vec![1];
        v.extend_items(vec![2, 3]).extend_items(vec![4]);
        assert_eq!(v, vec![1, 2, 3, 4]);
    }

    #[test]
    fn remove_item_only_first_occurrence() {
        let mut v = vec![1, 2, 3];
        assert!(v.remove_item(&2));
        assert_eq!(v, vec![1, 3]);

        let mut v = vec![1, 2, 3];
        assert!(!v.remove_item(&9));
        assert_eq!(v, vec![1, 2, 3]);

        let mut v = vec![2, 1, 2];
        assert!(v.remove_item(&2));
        assert_eq!(v, vec![1, 2]);
    }

    #[test]
    fn remove_item_uses_strict_equality_for_values() {
        let mut v = vec![Value::Number(f64::NAN), Value::from("1")];
        assert!(!v.remove_item(&Value::Number(f64::NAN)));
        assert!(!v.remove_item(&Value::from(1)));
        assert!(v.remove_item(&Value::from("1")));
    }

    #[test]
    fn first_n_and_last_n_clamp() {
        let v = vec![1, 2, 3];
        assert_eq!(v.first_n(2), &[1, 2]);
        assert_eq!(v.first_n(10), &[1, 2, 3]);
        assert_eq!(v.first_n(0), &[] as &[i32]);
        assert_eq!(v.last_n(2), &[2, 3]);
        assert_eq!(v.last_n(10), &[1, 2, 3]);
        assert_eq!(v.last_n(0), &[] as &[i32]);
    }

    #[test]
    fn shallow_clone_is_a_distinct_vec() {
        let v = vec![1, 2];
        let mut c = v.shallow_clone();
        c.push(3);
        assert_eq!(v, vec![1, 2]);
        assert_eq!(c, vec![1, 2, 3]);
    }

    #[test]
    fn includes_uses_equality() {
        let v = vec![Value::from("a"), Value::from(1)];
        assert!(v.includes(&Value::from(1)));
        assert!(!v.includes(&Value::from("1")));
    }

    #[test]
    fn count_from_f64_truncates_and_floors_at_zero() {
        assert_eq!(count_from_f64(2.9), 2);
        assert_eq!(count_from_f64(-1.0), 0);
        assert_eq!(count_from_f64(f64::NAN), 0);
    }
}
