//! Type-erased slice of fixed-size byte elements.
//!
//! [`ByteSlice`] stores elements as opaque blocks of `element_size` bytes
//! in a single `Vec<u8>`. It offers the same operations as
//! [`Slice`](crate::Slice), with callbacks that interpret the raw bytes.
//! Element sizes are checked on every mutation, so a block of the wrong
//! width is rejected rather than corrupting neighbouring elements.

use std::fmt;
use std::slice::ChunksExact;

use stride_core::{
    byte_len, resolve, ConfigError, GrowthPolicy, SliceConfig, SliceError, StridePlan,
    SubrangeBounds,
};

/// A growable container of opaque `element_size`-byte elements.
///
/// `as_bytes().len() == len() * element_size()` always holds.
pub struct ByteSlice {
    /// Element bytes, packed back to back. Only the logical length is
    /// initialised; the reserved tail lives in the `Vec`'s spare capacity.
    data: Vec<u8>,
    element_size: usize,
    /// Logical capacity in elements.
    capacity: usize,
    growth: GrowthPolicy,
}

impl ByteSlice {
    /// Create an empty slice of `element_size`-byte elements with room for
    /// `initial_capacity` of them.
    ///
    /// Returns [`SliceError::InvalidArgument`] for a zero element size and
    /// [`SliceError::AllocationFailure`] if the buffer cannot be reserved.
    pub fn new(element_size: usize, initial_capacity: usize) -> Result<Self, SliceError> {
        Self::with_config(element_size, SliceConfig::new(initial_capacity))
    }

    /// Create an empty slice from a validated [`SliceConfig`].
    pub fn with_config(element_size: usize, config: SliceConfig) -> Result<Self, SliceError> {
        if element_size == 0 {
            return Err(ConfigError::ZeroElementSize.into());
        }
        config.validate(element_size)?;
        let mut slice = Self {
            data: Vec::new(),
            element_size,
            capacity: 0,
            growth: config.growth,
        };
        slice.reserve_to(config.initial_capacity)?;
        Ok(slice)
    }

    fn sibling(&self, element_size: usize, capacity: usize) -> Result<Self, SliceError> {
        Self::with_config(
            element_size,
            SliceConfig::new(capacity).with_growth(self.growth),
        )
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> usize {
        self.data.len() / self.element_size
    }

    /// Returns `true` if the slice holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the slice can hold before the next growth.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size of one element in bytes.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Memory reserved for the logical capacity, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity.saturating_mul(self.element_size)
    }

    /// All stored element bytes, packed back to back.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over the elements as `element_size`-byte chunks.
    pub fn elements(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(self.element_size)
    }

    fn range_of(&self, i: usize) -> std::ops::Range<usize> {
        let start = i * self.element_size;
        start..start + self.element_size
    }

    /// Bytes of the element at `index`, in place.
    ///
    /// Negative indices count from the back.
    pub fn get(&self, index: isize) -> Result<&[u8], SliceError> {
        let i = resolve(index, self.len())?;
        Ok(&self.data[self.range_of(i)])
    }

    /// Mutable bytes of the element at `index`, in place.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut [u8], SliceError> {
        let i = resolve(index, self.len())?;
        let range = self.range_of(i);
        Ok(&mut self.data[range])
    }

    fn check_width(&self, element: &[u8]) -> Result<(), SliceError> {
        if element.len() != self.element_size {
            return Err(SliceError::invalid(format!(
                "element is {} bytes, slice stores {}-byte elements",
                element.len(),
                self.element_size
            )));
        }
        Ok(())
    }

    /// Copy one element onto the end, growing the buffer first if full.
    ///
    /// `element` must be exactly `element_size` bytes.
    pub fn append(&mut self, element: &[u8]) -> Result<(), SliceError> {
        self.check_width(element)?;
        if self.len() == self.capacity {
            self.grow()?;
        }
        self.data.extend_from_slice(element);
        Ok(())
    }

    /// Append `count` elements packed back to back in `bytes`.
    ///
    /// `bytes` must be exactly `count * element_size` long. Elements are
    /// appended one at a time; on failure the ones already appended stay.
    pub fn append_array(&mut self, bytes: &[u8], count: usize) -> Result<(), SliceError> {
        let expected = count.checked_mul(self.element_size);
        if expected != Some(bytes.len()) {
            return Err(SliceError::invalid(format!(
                "{} bytes cannot hold {count} elements of {} bytes",
                bytes.len(),
                self.element_size
            )));
        }
        for element in bytes.chunks_exact(self.element_size) {
            self.append(element)?;
        }
        Ok(())
    }

    /// Append every element of `source`, in order.
    ///
    /// Both slices must share an element size. Stops at the first failure,
    /// leaving `self` partially extended.
    pub fn extend(&mut self, source: &ByteSlice) -> Result<(), SliceError> {
        if source.element_size != self.element_size {
            return Err(SliceError::invalid(format!(
                "cannot extend {}-byte elements with {}-byte elements",
                self.element_size, source.element_size
            )));
        }
        for element in source.elements() {
            self.append(element)?;
        }
        Ok(())
    }

    /// Release the buffer and start over with an empty, zero-capacity one.
    pub fn clear(&mut self) {
        let released = self.capacity;
        self.data = Vec::new();
        self.capacity = 0;
        tracing::debug!(
            released_capacity = released,
            element_size = self.element_size,
            "byte slice cleared"
        );
    }

    /// Strided copy with the compatibility bounds rules of
    /// [`Slice::subslice`](crate::Slice::subslice).
    pub fn subslice(&self, start: isize, end: isize, step: isize) -> Result<ByteSlice, SliceError> {
        let bounds = SubrangeBounds::legacy(start, end, self.len())?;
        self.copy_strided(bounds, step)
    }

    /// Strided copy of the half-open range `[start, end)`, as
    /// [`Slice::strided`](crate::Slice::strided).
    pub fn strided(&self, start: isize, end: isize, step: isize) -> Result<ByteSlice, SliceError> {
        let bounds = SubrangeBounds::half_open(start, end, self.len())?;
        self.copy_strided(bounds, step)
    }

    fn copy_strided(&self, bounds: SubrangeBounds, step: isize) -> Result<ByteSlice, SliceError> {
        let plan = StridePlan::new(bounds, step)?;
        let mut out = self.sibling(self.element_size, bounds.len())?;
        for i in plan {
            let element = self
                .data
                .get(self.range_of(i))
                .ok_or(SliceError::IndexOutOfRange {
                    index: i as isize,
                    len: self.len(),
                })?;
            out.append(element)?;
        }
        Ok(out)
    }

    /// Build a slice of `result_element_size`-byte elements by calling `f`
    /// on every element in index order.
    ///
    /// `f` receives the source element and a zeroed output block of
    /// `result_element_size` bytes to fill.
    pub fn map<F>(&self, result_element_size: usize, mut f: F) -> Result<ByteSlice, SliceError>
    where
        F: FnMut(&[u8], &mut [u8]),
    {
        let mut out = self.sibling(result_element_size, self.len())?;
        let mut block = vec![0u8; result_element_size];
        for element in self.elements() {
            block.fill(0);
            f(element, &mut block);
            out.append(&block)?;
        }
        Ok(out)
    }

    /// Build a slice of the elements for which `predicate` returns `true`.
    pub fn filter<F>(&self, mut predicate: F) -> Result<ByteSlice, SliceError>
    where
        F: FnMut(&[u8]) -> bool,
    {
        let mut out = self.sibling(self.element_size, 0)?;
        for element in self.elements().filter(|e| predicate(*e)) {
            out.append(element)?;
        }
        Ok(out)
    }

    /// Left fold into an accumulator seeded with a copy of the first
    /// element. `combine` updates the accumulator in place.
    ///
    /// Returns [`SliceError::EmptySource`] for an empty slice.
    pub fn reduce<F>(&self, mut combine: F) -> Result<Vec<u8>, SliceError>
    where
        F: FnMut(&mut [u8], &[u8]),
    {
        let mut elements = self.elements();
        let mut acc = elements.next().ok_or(SliceError::EmptySource)?.to_vec();
        for element in elements {
            combine(&mut acc, element);
        }
        Ok(acc)
    }

    /// Call `action` on every element in index order.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&[u8]),
    {
        self.elements().for_each(action);
    }

    fn grow(&mut self) -> Result<(), SliceError> {
        let old = self.capacity;
        let new = self.growth.next_capacity(old)?;
        self.reserve_to(new)?;
        tracing::trace!(
            old_capacity = old,
            new_capacity = new,
            element_size = self.element_size,
            "byte slice grew"
        );
        Ok(())
    }

    fn reserve_to(&mut self, capacity: usize) -> Result<(), SliceError> {
        let bytes = byte_len(capacity, self.element_size)?;
        let additional = bytes.saturating_sub(self.data.len());
        self.data.try_reserve_exact(additional).map_err(|err| {
            tracing::debug!(requested_bytes = bytes, %err, "byte slice reservation failed");
            SliceError::AllocationFailure {
                requested_bytes: Some(bytes),
            }
        })?;
        self.capacity = capacity;
        Ok(())
    }
}

impl Clone for ByteSlice {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.memory_bytes());
        data.extend_from_slice(&self.data);
        Self {
            data,
            element_size: self.element_size,
            capacity: self.capacity,
            growth: self.growth,
        }
    }
}

impl PartialEq for ByteSlice {
    fn eq(&self, other: &Self) -> bool {
        self.element_size == other.element_size && self.data == other.data
    }
}

impl Eq for ByteSlice {}

impl fmt::Debug for ByteSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteSlice")
            .field("element_size", &self.element_size)
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("elements", &self.elements().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_test_utils::{decode_i32, encode_i32, ints, I32_SIZE};

    fn from_ints(values: &[i32]) -> ByteSlice {
        let mut s = ByteSlice::new(I32_SIZE, 0).unwrap();
        s.append_array(&encode_i32(values), values.len()).unwrap();
        s
    }

    fn to_ints(s: &ByteSlice) -> Vec<i32> {
        s.elements().map(decode_i32).collect()
    }

    #[test]
    fn zero_element_size_rejected() {
        assert!(matches!(
            ByteSlice::new(0, 4),
            Err(SliceError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn overflowing_capacity_reports_allocation_failure() {
        let overflow = SliceError::AllocationFailure {
            requested_bytes: None,
        };
        assert_eq!(ByteSlice::new(8, usize::MAX), Err(overflow));
        assert!(matches!(
            ByteSlice::new(1, usize::MAX),
            Err(SliceError::AllocationFailure { .. })
        ));
    }

    #[test]
    fn new_reserves_capacity() {
        let s = ByteSlice::new(3, 5).unwrap();
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 5);
        assert_eq!(s.memory_bytes(), 15);
    }

    #[test]
    fn get_resolves_negative_indices() {
        let s = from_ints(&ints(4));
        assert_eq!(decode_i32(s.get(0).unwrap()), 1);
        assert_eq!(decode_i32(s.get(-1).unwrap()), 4);
        assert_eq!(
            s.get(-5),
            Err(SliceError::IndexOutOfRange { index: -5, len: 4 })
        );
        assert!(s.get(4).is_err());
    }

    #[test]
    fn get_mut_writes_in_place() {
        let mut s = from_ints(&[1, 2, 3]);
        s.get_mut(-1).unwrap().copy_from_slice(&30i32.to_le_bytes());
        assert_eq!(to_ints(&s), vec![1, 2, 30]);
    }

    #[test]
    fn append_rejects_wrong_width() {
        let mut s = ByteSlice::new(4, 0).unwrap();
        assert!(matches!(
            s.append(&[1, 2, 3]),
            Err(SliceError::InvalidArgument { .. })
        ));
        assert!(s.is_empty());
        assert_eq!(s.capacity(), 0);
    }

    #[test]
    fn append_array_checks_total_length() {
        let mut s = ByteSlice::new(4, 0).unwrap();
        assert!(s.append_array(&[0; 7], 2).is_err());
        assert!(s.append_array(&[0; 8], usize::MAX).is_err());
        s.append_array(&[0; 8], 2).unwrap();
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn growth_preserves_bytes() {
        let mut s = ByteSlice::new(2, 0).unwrap();
        for i in 0u16..100 {
            s.append(&i.to_le_bytes()).unwrap();
        }
        assert_eq!(s.capacity(), 126);
        for (i, element) in s.elements().enumerate() {
            assert_eq!(u16::from_le_bytes([element[0], element[1]]), i as u16);
        }
    }

    #[test]
    fn extend_requires_matching_width() {
        let mut a = from_ints(&[1]);
        let b = ByteSlice::new(8, 0).unwrap();
        assert!(a.extend(&b).is_err());
        a.extend(&from_ints(&[2, 3])).unwrap();
        assert_eq!(to_ints(&a), vec![1, 2, 3]);
    }

    #[test]
    fn clear_then_append() {
        let mut s = from_ints(&ints(6));
        s.clear();
        assert_eq!((s.len(), s.capacity()), (0, 0));
        s.append(&encode_i32(&[9])).unwrap();
        assert_eq!(to_ints(&s), vec![9]);
    }

    #[test]
    fn subslice_matches_typed_rules() {
        let s = from_ints(&ints(5));
        assert_eq!(to_ints(&s.subslice(0, 5, -1).unwrap()), vec![5, 4, 3, 2, 1]);
        assert_eq!(to_ints(&s.subslice(1, -1, 2).unwrap()), vec![2, 4]);
        assert!(s.subslice(3, 3, 1).is_err());
        assert!(s.strided(3, 3, 1).unwrap().is_empty());
    }

    #[test]
    fn subslice_is_independent_of_source() {
        let source = from_ints(&[1, 2, 3]);
        let mut copy = source.subslice(0, 3, 1).unwrap();
        copy.get_mut(0).unwrap().copy_from_slice(&100i32.to_le_bytes());
        copy.append(&encode_i32(&[4])).unwrap();
        assert_eq!(to_ints(&source), vec![1, 2, 3]);
        assert_eq!(to_ints(&copy), vec![100, 2, 3, 4]);
    }

    #[test]
    fn strided_with_negative_bounds_and_step() {
        let s = from_ints(&ints(6));
        assert_eq!(to_ints(&s.strided(0, -1, -2).unwrap()), vec![5, 3, 1]);
        assert_eq!(to_ints(&s.strided(-4, 6, 1).unwrap()), vec![3, 4, 5, 6]);
        assert_eq!(to_ints(&s.strided(-3, -1, -1).unwrap()), vec![5, 4]);
        assert!(s.strided(0, 6, 0).is_err());
    }

    #[test]
    fn filter_rejecting_everything_is_empty() {
        let s = from_ints(&ints(4));
        let none = s.filter(|_| false).unwrap();
        assert!(none.is_empty());
        assert_eq!(none.element_size(), I32_SIZE);
    }

    #[test]
    fn map_changes_element_size() {
        let s = from_ints(&[1, 2, 3]);
        let doubled = s
            .map(8, |src, dst| {
                let v = i64::from(decode_i32(src)) * 2;
                dst.copy_from_slice(&v.to_le_bytes());
            })
            .unwrap();
        assert_eq!(doubled.element_size(), 8);
        let values: Vec<i64> = doubled
            .elements()
            .map(|e| i64::from_le_bytes(e.try_into().unwrap()))
            .collect();
        assert_eq!(values, vec![2, 4, 6]);
    }

    #[test]
    fn map_to_zero_width_rejected() {
        let s = from_ints(&[1]);
        assert!(s.map(0, |_, _| {}).is_err());
    }

    #[test]
    fn filter_and_reduce() {
        let s = from_ints(&ints(6));
        let even = s.filter(|e| decode_i32(e) % 2 == 0).unwrap();
        assert_eq!(to_ints(&even), vec![2, 4, 6]);

        let sum = s
            .reduce(|acc, e| {
                let total = decode_i32(acc) + decode_i32(e);
                acc.copy_from_slice(&total.to_le_bytes());
            })
            .unwrap();
        assert_eq!(decode_i32(&sum), 21);
    }

    #[test]
    fn reduce_empty_reports_empty_source() {
        let s = ByteSlice::new(4, 0).unwrap();
        assert_eq!(s.reduce(|_, _| {}), Err(SliceError::EmptySource));
    }

    #[test]
    fn for_each_visits_in_order() {
        let mut seen = Vec::new();
        from_ints(&[3, 1, 2]).for_each(|e| seen.push(decode_i32(e)));
        assert_eq!(seen, vec![3, 1, 2]);
    }
}
