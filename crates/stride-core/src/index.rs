//! Negative-index resolution and strided traversal planning.
//!
//! Every accessor funnels through [`resolve`], and every subrange
//! operation through [`SubrangeBounds`] + [`StridePlan`], so the
//! Python-style index rules live in exactly one place.

use crate::error::SliceError;

/// Resolve a possibly-negative index against a container of length `len`.
///
/// Non-negative indices address from the front; negative indices address
/// `len + index` from the back, so `-1` is the last element. Returns
/// [`SliceError::IndexOutOfRange`] when the resolved position falls outside
/// `[0, len)`.
pub fn resolve(index: isize, len: usize) -> Result<usize, SliceError> {
    let resolved = if index >= 0 {
        Some(index as usize).filter(|&i| i < len)
    } else {
        len.checked_sub(index.unsigned_abs())
    };
    resolved.ok_or(SliceError::IndexOutOfRange { index, len })
}

/// Container length as a signed bound for subrange arithmetic.
fn signed_len(len: usize) -> Result<isize, SliceError> {
    isize::try_from(len).map_err(|_| SliceError::invalid(format!("length {len} exceeds isize::MAX")))
}

/// A validated, non-negative half-open range `[start, end)` within a
/// container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubrangeBounds {
    start: usize,
    end: usize,
}

impl SubrangeBounds {
    /// Normalize bounds with the compatibility rules used by `subslice`.
    ///
    /// - `start` must satisfy `-len <= start < len`; `end` must satisfy
    ///   `-len <= end <= len`.
    /// - A negative `start` becomes `start + len`; a negative `end` becomes
    ///   `end + len + 1`, so `end == -1` reaches the last element inclusive.
    /// - After normalization `start >= end` is rejected, so an empty range
    ///   is never produced.
    pub fn legacy(start: isize, end: isize, len: usize) -> Result<Self, SliceError> {
        let n = signed_len(len)?;
        if start >= n || start < -n {
            return Err(SliceError::invalid(format!(
                "start {start} outside [-{n}, {n})"
            )));
        }
        if end > n || end < -n {
            return Err(SliceError::invalid(format!("end {end} outside [-{n}, {n}]")));
        }
        let start = if start < 0 { start + n } else { start };
        let end = if end < 0 { end + n + 1 } else { end };
        if start >= end {
            return Err(SliceError::invalid(format!(
                "normalized start {start} is not before end {end}"
            )));
        }
        Ok(Self {
            start: start as usize,
            end: end as usize,
        })
    }

    /// Normalize bounds with conventional half-open semantics.
    ///
    /// Both `start` and `end` must lie in `[-len, len]` and a negative value
    /// becomes `value + len` for either endpoint. `start >= end` yields an
    /// empty range rather than an error.
    pub fn half_open(start: isize, end: isize, len: usize) -> Result<Self, SliceError> {
        let n = signed_len(len)?;
        for (name, value) in [("start", start), ("end", end)] {
            if value > n || value < -n {
                return Err(SliceError::invalid(format!(
                    "{name} {value} outside [-{n}, {n}]"
                )));
            }
        }
        let start = (if start < 0 { start + n } else { start }) as usize;
        let end = (if end < 0 { end + n } else { end }) as usize;
        Ok(Self {
            start,
            end: end.max(start),
        })
    }

    /// Bounds covering an entire container of length `len`.
    pub fn full(len: usize) -> Self {
        Self { start: 0, end: len }
    }

    /// First index in the range.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last index in the range.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of indices in the range.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the range contains no indices.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Iterator over the indices visited by a strided copy.
///
/// With `step > 0` the plan walks `start, start + step, ...` while
/// `< end`. With `step < 0` it walks `end - 1, end - 1 - |step|, ...`
/// while `>= start`. The sign of `step` only changes direction; the
/// range itself is the same.
#[derive(Clone, Debug)]
pub struct StridePlan {
    cursor: usize,
    stride: usize,
    descending: bool,
    remaining: usize,
}

impl StridePlan {
    /// Plan a traversal of `bounds` with the given `step`.
    ///
    /// Returns [`SliceError::InvalidArgument`] when `step == 0`.
    pub fn new(bounds: SubrangeBounds, step: isize) -> Result<Self, SliceError> {
        if step == 0 {
            return Err(SliceError::invalid("step must be non-zero"));
        }
        let stride = step.unsigned_abs();
        let remaining = bounds.len().div_ceil(stride);
        let descending = step < 0;
        let cursor = if descending && !bounds.is_empty() {
            bounds.end - 1
        } else {
            bounds.start
        };
        Ok(Self {
            cursor,
            stride,
            descending,
            remaining,
        })
    }
}

impl Iterator for StridePlan {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.cursor;
        self.remaining -= 1;
        // The remaining count guarantees the next cursor stays inside the range.
        if self.remaining > 0 {
            self.cursor = if self.descending {
                current - self.stride
            } else {
                current + self.stride
            };
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for StridePlan {}

impl std::iter::FusedIterator for StridePlan {}
