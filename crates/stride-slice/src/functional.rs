//! Functional combinators over [`Slice`]: map, filter, reduce, for-each.
//!
//! Combinators that build a new slice own it until they return, so a
//! failure part-way through drops the partial result before the error is
//! propagated.

use stride_core::SliceError;

use crate::slice::Slice;

impl<T> Slice<T> {
    /// Build a new slice by applying `f` to every element in index order.
    ///
    /// The result is preallocated for `len()` elements of `U`.
    pub fn map<U, F>(&self, mut f: F) -> Result<Slice<U>, SliceError>
    where
        F: FnMut(&T) -> U,
    {
        let mut out = self.sibling(self.len())?;
        for value in self.iter() {
            out.append(f(value))?;
        }
        Ok(out)
    }

    /// Call `action` on every element in index order.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(action);
    }

    /// Left fold seeded with a clone of the first element.
    ///
    /// Returns [`SliceError::EmptySource`] when there is nothing to seed
    /// with. A single-element slice yields that element unchanged.
    pub fn reduce<F>(&self, combine: F) -> Result<T, SliceError>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let (first, rest) = self
            .as_slice()
            .split_first()
            .ok_or(SliceError::EmptySource)?;
        Ok(rest.iter().fold(first.clone(), combine))
    }

    /// Build a new slice holding, in order, the elements for which
    /// `predicate` returns `true`.
    ///
    /// The result starts at zero capacity and grows as matches are found.
    pub fn filter<F>(&self, mut predicate: F) -> Result<Slice<T>, SliceError>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let mut out = self.sibling(0)?;
        for value in self.iter().filter(|v| predicate(*v)) {
            out.append(value.clone())?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_test_utils::ints;

    fn one_to(n: i32) -> Slice<i32> {
        ints(n).into()
    }

    #[test]
    fn identity_map_preserves_elements() {
        let s = one_to(4);
        assert_eq!(s.map(|v| *v).unwrap(), s);
    }

    #[test]
    fn map_changes_element_type() {
        let s = one_to(3);
        let widened: Slice<f64> = s.map(|v| f64::from(*v) * 0.5).unwrap();
        assert_eq!(widened.element_size(), 8);
        assert_eq!(widened, [0.5, 1.0, 1.5]);
        assert_eq!(widened.capacity(), 3);
    }

    #[test]
    fn map_over_empty_is_empty() {
        let s = Slice::<u8>::new();
        assert!(s.map(|v| u32::from(*v)).unwrap().is_empty());
    }

    #[test]
    fn filter_always_true_copies() {
        let s = one_to(5);
        assert_eq!(s.filter(|_| true).unwrap(), s);
    }

    #[test]
    fn filter_always_false_is_empty() {
        let out = one_to(5).filter(|_| false).unwrap();
        assert_eq!(out.len(), 0);
        assert_eq!(out.capacity(), 0);
    }

    #[test]
    fn filter_keeps_order() {
        assert_eq!(one_to(9).filter(|v| v % 3 == 0).unwrap(), [3, 6, 9]);
    }

    #[test]
    fn reduce_sums() {
        assert_eq!(one_to(3).reduce(|acc, v| acc + v), Ok(6));
    }

    #[test]
    fn reduce_single_element_is_unchanged() {
        let s: Slice<i32> = vec![41].into();
        assert_eq!(s.reduce(|_, _| unreachable!()), Ok(41));
    }

    #[test]
    fn reduce_empty_reports_empty_source() {
        let s = Slice::<i32>::new();
        assert_eq!(s.reduce(|acc, v| acc + v), Err(SliceError::EmptySource));
    }

    #[test]
    fn reduce_is_left_fold() {
        let s: Slice<i32> = vec![100, 10, 1].into();
        assert_eq!(s.reduce(|acc, v| acc - v), Ok(89));
    }

    #[test]
    fn for_each_visits_in_order() {
        let mut seen = Vec::new();
        one_to(4).for_each(|v| seen.push(*v));
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }
}
