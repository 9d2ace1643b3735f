//! Strided subrange extraction for [`Slice`].

use stride_core::{SliceError, StridePlan, SubrangeBounds};

use crate::slice::Slice;

impl<T: Clone> Slice<T> {
    /// Copy every `|step|`-th element of `[start, end)` into a new slice.
    ///
    /// Bounds follow the compatibility rules of
    /// [`SubrangeBounds::legacy`]: `start` must lie in `[-len, len)`, `end`
    /// in `[-len, len]`, a negative `end` normalizes to `end + len + 1`, and
    /// a normalized `start >= end` is rejected. A positive `step` walks
    /// forward from `start`; a negative one walks backward from `end - 1`.
    ///
    /// ```
    /// use stride_slice::Slice;
    ///
    /// let s: Slice<i32> = vec![1, 2, 3, 4, 5].into();
    /// assert_eq!(s.subslice(0, 5, 2).unwrap(), [1, 3, 5]);
    /// assert_eq!(s.subslice(0, -1, -1).unwrap(), [5, 4, 3, 2, 1]);
    /// ```
    pub fn subslice(&self, start: isize, end: isize, step: isize) -> Result<Slice<T>, SliceError> {
        let bounds = SubrangeBounds::legacy(start, end, self.len())?;
        self.copy_strided(bounds, step)
    }

    /// Copy every `|step|`-th element of the half-open range `[start, end)`.
    ///
    /// Unlike [`subslice`](Self::subslice), both endpoints normalize as
    /// `value + len` when negative and `start >= end` produces an empty
    /// slice.
    pub fn strided(&self, start: isize, end: isize, step: isize) -> Result<Slice<T>, SliceError> {
        let bounds = SubrangeBounds::half_open(start, end, self.len())?;
        self.copy_strided(bounds, step)
    }

    fn copy_strided(&self, bounds: SubrangeBounds, step: isize) -> Result<Slice<T>, SliceError> {
        let plan = StridePlan::new(bounds, step)?;
        let mut out = self.sibling(bounds.len())?;
        for i in plan {
            let value = self.as_slice().get(i).ok_or(SliceError::IndexOutOfRange {
                index: i as isize,
                len: self.len(),
            })?;
            out.append(value.clone())?;
        }
        Ok(out)
    }
}
