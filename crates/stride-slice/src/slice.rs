//! The typed growable slice.
//!
//! [`Slice<T>`] owns one contiguous buffer and tracks its own logical
//! capacity so growth follows the configured [`GrowthPolicy`] exactly.
//! Reservations go through `Vec::try_reserve_exact`, which turns
//! out-of-memory and size overflow into [`SliceError::AllocationFailure`]
//! instead of aborting the process.

use std::fmt;

use stride_core::{byte_len, resolve, GrowthPolicy, SliceConfig, SliceError};

/// A growable, exclusively owned, contiguous container.
///
/// Indices are `isize` and resolve Python-style: `-1` is the last
/// element. Subranges and combinator results are new, independently
/// owned containers that never alias the source.
///
/// # Invariants
///
/// - `len() <= capacity()` at all times.
/// - The backing `Vec` always has room for `capacity()` elements, so an
///   append below capacity never reallocates.
pub struct Slice<T> {
    /// Backing storage. `data.len()` is the logical length.
    data: Vec<T>,
    /// Logical capacity in elements. The `Vec` may hold more.
    capacity: usize,
    growth: GrowthPolicy,
}

impl<T> Slice<T> {
    /// Create an empty slice with zero capacity and default growth.
    ///
    /// Does not allocate.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
            growth: GrowthPolicy::default(),
        }
    }

    /// Create an empty slice with room for `initial_capacity` elements.
    ///
    /// Returns [`SliceError::AllocationFailure`] if the buffer cannot be
    /// reserved.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, SliceError> {
        Self::with_config(SliceConfig::new(initial_capacity))
    }

    /// Create an empty slice from a validated [`SliceConfig`].
    pub fn with_config(config: SliceConfig) -> Result<Self, SliceError> {
        config.validate(std::mem::size_of::<T>())?;
        let mut slice = Self {
            data: Vec::new(),
            capacity: 0,
            growth: config.growth,
        };
        slice.reserve_to(config.initial_capacity)?;
        Ok(slice)
    }

    /// Empty slice with room for `capacity` elements that grows the way
    /// `self` does.
    pub(crate) fn sibling<U>(&self, capacity: usize) -> Result<Slice<U>, SliceError> {
        Slice::with_config(SliceConfig::new(capacity).with_growth(self.growth))
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> usize {
        self.data.len()
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
        std::mem::size_of::<T>()
    }

    /// Growth policy applied when an append finds the slice full.
    pub fn growth(&self) -> GrowthPolicy {
        self.growth
    }

    /// Memory reserved for the logical capacity, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity.saturating_mul(self.element_size())
    }

    /// Borrow the stored elements as a standard slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrow the stored elements mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the stored elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the slice and return its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Reference to the element at `index`, in place.
    ///
    /// Negative indices count from the back. Returns
    /// [`SliceError::IndexOutOfRange`] when the resolved index is outside
    /// `[0, len)`.
    pub fn get(&self, index: isize) -> Result<&T, SliceError> {
        let i = resolve(index, self.len())?;
        Ok(&self.data[i])
    }

    /// Mutable reference to the element at `index`, in place.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, SliceError> {
        let i = resolve(index, self.len())?;
        Ok(&mut self.data[i])
    }

    /// Append one element, growing the buffer first if it is full.
    ///
    /// On failure the slice is left exactly as it was and `value` is
    /// dropped.
    pub fn append(&mut self, value: T) -> Result<(), SliceError> {
        if self.len() == self.capacity {
            self.grow()?;
        }
        self.data.push(value);
        Ok(())
    }

    /// Release the buffer and start over with an empty, zero-capacity one.
    ///
    /// Never fails: an empty buffer needs no allocation.
    pub fn clear(&mut self) {
        let released = self.capacity;
        self.data = Vec::new();
        self.capacity = 0;
        tracing::debug!(released_capacity = released, "slice cleared");
    }

    fn grow(&mut self) -> Result<(), SliceError> {
        let old = self.capacity;
        let new = self.growth.next_capacity(old)?;
        self.reserve_to(new)?;
        tracing::trace!(
            old_capacity = old,
            new_capacity = new,
            element_size = self.element_size(),
            "slice grew"
        );
        Ok(())
    }

    /// Make the backing buffer hold at least `capacity` elements and record
    /// `capacity` as the logical capacity.
    fn reserve_to(&mut self, capacity: usize) -> Result<(), SliceError> {
        let bytes = byte_len(capacity, self.element_size())?;
        let additional = capacity.saturating_sub(self.data.len());
        self.data.try_reserve_exact(additional).map_err(|err| {
            tracing::debug!(requested_bytes = bytes, %err, "slice reservation failed");
            SliceError::AllocationFailure {
                requested_bytes: Some(bytes),
            }
        })?;
        self.capacity = capacity;
        Ok(())
    }
}

impl<T: Clone> Slice<T> {
    /// Append clones of every element in `values`, in order.
    ///
    /// Stops at the first failure; elements appended before it stay.
    pub fn append_array(&mut self, values: &[T]) -> Result<(), SliceError> {
        for value in values {
            self.append(value.clone())?;
        }
        Ok(())
    }

    /// Append clones of every element of `source`, in order.
    ///
    /// Stops at the first failure, leaving `self` partially extended.
    pub fn extend(&mut self, source: &Slice<T>) -> Result<(), SliceError> {
        self.append_array(source.as_slice())
    }
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Slice<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
            growth: self.growth,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Slice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Slice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for Slice<T> {}

impl<T: PartialEq> PartialEq<[T]> for Slice<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.data.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Slice<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.data.as_slice() == other.as_slice()
    }
}

/// Adopts the vector's elements. Spare capacity is released so that
/// [`Slice::memory_bytes`] matches what the buffer holds.
impl<T> From<Vec<T>> for Slice<T> {
    fn from(mut data: Vec<T>) -> Self {
        data.shrink_to_fit();
        let capacity = data.len();
        Self {
            data,
            capacity,
            growth: GrowthPolicy::default(),
        }
    }
}

impl<T> FromIterator<T> for Slice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<'a, T> IntoIterator for &'a Slice<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> IntoIterator for Slice<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
