//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_filter::domain::BloomConfigBuilder;
//!
//! let config = BloomConfigBuilder::new()
//!     .expected_elements(10_000)
//!     .target_fpr(0.001)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.expected_elements, 10_000);
//! ```

use serde::{Deserialize, Serialize};

use super::parameters::{calculate_optimal_parameters, validate_inputs, BloomFilterParams};
use crate::error::Result;

/// Sizing inputs for a Bloom filter
///
/// Deserializable so an embedding application can keep filter sizing in
/// its own config file. Missing fields take the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    /// Designed capacity (n), must be at least 1
    pub expected_elements: usize,
    /// Target false positive rate (p), strictly between 0 and 1
    pub target_fpr: f64,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            expected_elements: 1_000,
            target_fpr: 0.01, // 1% false positive rate
        }
    }
}

impl BloomConfig {
    /// Create a new configuration with validation
    pub fn new(expected_elements: usize, target_fpr: f64) -> Result<Self> {
        let config = Self {
            expected_elements,
            target_fpr,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check capacity and rate bounds
    pub fn validate(&self) -> Result<()> {
        validate_inputs(self.expected_elements, self.target_fpr)
    }

    /// Size the filter this configuration describes
    pub fn parameters(&self) -> Result<BloomFilterParams> {
        calculate_optimal_parameters(self.expected_elements, self.target_fpr)
    }

    /// Builder-style method to set target FPR
    pub fn with_target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = fpr;
        self
    }

    /// Builder-style method to set expected elements
    pub fn with_expected_elements(mut self, n: usize) -> Self {
        self.expected_elements = n;
        self
    }
}

/// Builder for BloomConfig with validation
#[derive(Default)]
pub struct BloomConfigBuilder {
    expected_elements: Option<usize>,
    target_fpr: Option<f64>,
}

impl BloomConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the designed capacity
    pub fn expected_elements(mut self, n: usize) -> Self {
        self.expected_elements = Some(n);
        self
    }

    /// Set target false positive rate (strictly between 0 and 1)
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Build the BloomConfig, validating all parameters
    pub fn build(self) -> Result<BloomConfig> {
        let defaults = BloomConfig::default();

        BloomConfig::new(
            self.expected_elements.unwrap_or(defaults.expected_elements),
            self.target_fpr.unwrap_or(defaults.target_fpr),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;

    #[test]
    fn test_default_config_is_valid() {
        let config = BloomConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_rejects_zero_capacity() {
        let config = BloomConfig {
            expected_elements: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(FilterError::InvalidCapacity { n: 0 })
        );
    }

    #[test]
    fn test_config_validation_rejects_fpr_bounds() {
        for fpr in [0.0, 1.0] {
            let config = BloomConfig::default().with_target_fpr(fpr);
            assert!(matches!(
                config.validate(),
                Err(FilterError::InvalidFalsePositiveRate { .. })
            ));
        }
    }

    #[test]
    fn test_config_parameters_match_formulas() {
        let params = BloomConfig::new(100, 0.01).unwrap().parameters().unwrap();
        assert_eq!(params.size_bits, 959);
        assert_eq!(params.hash_count, 7);
    }

    #[test]
    fn test_builder_creates_valid_config() {
        let config = BloomConfigBuilder::new()
            .expected_elements(500)
            .target_fpr(0.05)
            .build()
            .expect("Should create valid config");

        assert_eq!(config.expected_elements, 500);
        assert_eq!(config.target_fpr, 0.05);
    }

    #[test]
    fn test_builder_rejects_invalid_fpr() {
        let result = BloomConfigBuilder::new().target_fpr(1.5).build();
        assert!(matches!(
            result,
            Err(FilterError::InvalidFalsePositiveRate { .. })
        ));
    }

    #[test]
    fn test_builder_uses_defaults() {
        let config = BloomConfigBuilder::new()
            .target_fpr(0.05)
            .build()
            .expect("Should use defaults for other fields");

        assert_eq!(config.expected_elements, BloomConfig::default().expected_elements);
    }

    #[test]
    fn test_with_setters_chain() {
        let config = BloomConfig::default()
            .with_expected_elements(42)
            .with_target_fpr(0.2);

        assert_eq!(config, BloomConfig::new(42, 0.2).unwrap());
    }
}
