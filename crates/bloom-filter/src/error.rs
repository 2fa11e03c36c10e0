//! Error types for Bloom filter construction
//!
//! Every error is a construction-time validation failure. Once a filter
//! exists, `add` and `contains` cannot fail.

use thiserror::Error;

/// Errors raised while sizing or configuring a Bloom filter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("Invalid capacity: {n} (expected elements must be at least 1)")]
    InvalidCapacity { n: usize },

    #[error("Invalid false positive rate: {fpr} (must be strictly between 0 and 1)")]
    InvalidFalsePositiveRate { fpr: f64 },

    #[error("Filter size exceeds addressable maximum: {bits} > {max} bits")]
    FilterTooLarge { bits: f64, max: usize },
}

/// Result alias for filter construction
pub type Result<T> = std::result::Result<T, FilterError>;
