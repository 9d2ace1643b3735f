//! Container configuration parameters.

use crate::error::ConfigError;
use crate::growth::{byte_len, GrowthPolicy};

/// Configuration for a new container.
///
/// Controls the up-front reservation and how the buffer grows once it is
/// full. Validated when the container is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliceConfig {
    /// Number of elements reserved at construction.
    ///
    /// Default: 0. A zero-capacity container still holds a valid (empty)
    /// buffer, so the first append simply grows.
    pub initial_capacity: usize,

    /// Growth rule applied when an append finds `len == capacity`.
    pub growth: GrowthPolicy,
}

impl SliceConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

    /// Create a config with the given initial capacity and default growth.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth: GrowthPolicy::default(),
        }
    }

    /// Replace the growth policy.
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Check the config against an element size in bytes.
    pub fn validate(&self, element_size: usize) -> Result<(), ConfigError> {
        if self.growth == (GrowthPolicy::Additive { step: 0 }) {
            return Err(ConfigError::ZeroGrowthStep);
        }
        if byte_len(self.initial_capacity, element_size).is_err() {
            return Err(ConfigError::CapacityOverflow {
                capacity: self.initial_capacity,
                element_size,
            });
        }
        Ok(())
    }
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_doubling() {
        let config = SliceConfig::default();
        assert_eq!(config.initial_capacity, 0);
        assert_eq!(config.growth, GrowthPolicy::Doubling);
        assert!(config.validate(4).is_ok());
    }

    #[test]
    fn zero_additive_step_fails_validation() {
        let config = SliceConfig::new(4).with_growth(GrowthPolicy::Additive { step: 0 });
        assert_eq!(config.validate(4), Err(ConfigError::ZeroGrowthStep));
    }

    #[test]
    fn overflowing_capacity_fails_validation() {
        let config = SliceConfig::new(usize::MAX);
        match config.validate(8) {
            Err(ConfigError::CapacityOverflow { element_size: 8, .. }) => {}
            other => panic!("expected CapacityOverflow, got {other:?}"),
        }
    }
}
