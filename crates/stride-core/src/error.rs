//! Error types for Stride containers.
//!
//! [`SliceError`] is the single failure channel for every container
//! operation. [`ConfigError`] covers configuration validation. A capacity
//! overflow folds into [`SliceError::AllocationFailure`]; every other
//! rejected config becomes [`SliceError::InvalidArgument`].

use std::error::Error;
use std::fmt;

/// Errors reported by container operations.
///
/// Every fallible operation returns one of these instead of panicking.
/// Operations that build a new container release the partially built
/// result before the error reaches the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SliceError {
    /// Memory for construction or growth could not be obtained, or the
    /// requested size overflowed `usize`.
    AllocationFailure {
        /// Size of the reservation that failed, in bytes. `None` when the
        /// byte count itself overflowed.
        requested_bytes: Option<usize>,
    },
    /// An argument violated the operation's contract (zero step,
    /// subrange bounds, mismatched element size, rejected config).
    InvalidArgument {
        /// Human-readable description of the violated contract.
        reason: String,
    },
    /// A resolved index fell outside `[0, len)`.
    IndexOutOfRange {
        /// The index as supplied by the caller, before resolution.
        index: isize,
        /// Length of the container at the time of the access.
        len: usize,
    },
    /// A reduction was requested on a container with no elements.
    EmptySource,
}

impl SliceError {
    /// Shorthand for [`SliceError::InvalidArgument`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailure {
                requested_bytes: Some(bytes),
            } => write!(f, "allocation failed: could not reserve {bytes} bytes"),
            Self::AllocationFailure {
                requested_bytes: None,
            } => write!(f, "allocation failed: requested size overflows usize"),
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for slice of length {len}")
            }
            Self::EmptySource => write!(f, "cannot reduce an empty slice"),
        }
    }
}

impl Error for SliceError {}

/// Errors from [`SliceConfig::validate`](crate::SliceConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `GrowthPolicy::Additive` with a step of zero would never grow.
    ZeroGrowthStep,
    /// The type-erased container was asked for zero-byte elements.
    ZeroElementSize,
    /// `initial_capacity * element_size` does not fit in `usize`.
    CapacityOverflow {
        /// The configured initial capacity, in elements.
        capacity: usize,
        /// Size of one element, in bytes.
        element_size: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroGrowthStep => write!(f, "additive growth step must be at least 1"),
            Self::ZeroElementSize => write!(f, "element size must be at least 1 byte"),
            Self::CapacityOverflow {
                capacity,
                element_size,
            } => write!(
                f,
                "capacity {capacity} × element size {element_size} overflows usize"
            ),
        }
    }
}

impl Error for ConfigError {}

impl From<ConfigError> for SliceError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::CapacityOverflow { .. } => Self::AllocationFailure {
                requested_bytes: None,
            },
            other => Self::InvalidArgument {
                reason: other.to_string(),
            },
        }
    }
}
