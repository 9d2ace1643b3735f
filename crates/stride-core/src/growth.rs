//! Capacity growth policy.
//!
//! Capacities are always counted in elements. Byte sizes are derived from
//! the element count with checked arithmetic in [`byte_len`], so the two
//! units can never drift apart.

use crate::error::SliceError;

/// How a container picks its next capacity when an append finds it full.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// `new = (capacity + 1) * 2`. Grows from zero to 2, then 6, 14, ...
    #[default]
    Doubling,
    /// `new = capacity + step`. Useful when memory is tight and appends are
    /// rare. `step` must be at least 1.
    Additive {
        /// Number of elements added per growth.
        step: usize,
    },
}

impl GrowthPolicy {
    /// Next capacity after `current`, in elements.
    ///
    /// Returns [`SliceError::AllocationFailure`] if the new capacity would
    /// overflow `usize`, or [`SliceError::InvalidArgument`] for a zero
    /// additive step.
    pub fn next_capacity(&self, current: usize) -> Result<usize, SliceError> {
        let next = match *self {
            Self::Doubling => current.checked_add(1).and_then(|c| c.checked_mul(2)),
            Self::Additive { step: 0 } => {
                return Err(SliceError::invalid("additive growth step must be at least 1"))
            }
            Self::Additive { step } => current.checked_add(step),
        };
        next.ok_or(SliceError::AllocationFailure {
            requested_bytes: None,
        })
    }
}

/// Bytes needed for `capacity` elements of `element_size` bytes each.
///
/// Returns [`SliceError::AllocationFailure`] with no byte count when the
/// product overflows.
pub fn byte_len(capacity: usize, element_size: usize) -> Result<usize, SliceError> {
    capacity
        .checked_mul(element_size)
        .ok_or(SliceError::AllocationFailure {
            requested_bytes: None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_sequence_from_zero() {
        let policy = GrowthPolicy::Doubling;
        let mut cap = 0;
        let mut seen = Vec::new();
        for _ in 0..4 {
            cap = policy.next_capacity(cap).unwrap();
            seen.push(cap);
        }
        assert_eq!(seen, vec![2, 6, 14, 30]);
    }

    #[test]
    fn doubling_overflow_is_allocation_failure() {
        let err = GrowthPolicy::Doubling.next_capacity(usize::MAX / 2).unwrap_err();
        assert_eq!(
            err,
            SliceError::AllocationFailure {
                requested_bytes: None
            }
        );
    }

    #[test]
    fn additive_grows_by_step() {
        let policy = GrowthPolicy::Additive { step: 8 };
        assert_eq!(policy.next_capacity(0), Ok(8));
        assert_eq!(policy.next_capacity(8), Ok(16));
    }

    #[test]
    fn additive_zero_step_rejected() {
        let policy = GrowthPolicy::Additive { step: 0 };
        assert!(matches!(
            policy.next_capacity(4),
            Err(SliceError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn byte_len_checks_overflow() {
        assert_eq!(byte_len(10, 4), Ok(40));
        assert!(byte_len(usize::MAX, 2).is_err());
    }
}
