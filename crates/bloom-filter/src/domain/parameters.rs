//! Optimal Bloom filter parameter calculation
//!
//! Formulas:
//! - m = ceil(-n*ln(fpr) / (ln(2)^2))  -- optimal bits
//! - k = ceil((m/n) * ln(2))           -- optimal hash probes
//!
//! Both are rounded up so the filter is never smaller, and never probes
//! less, than the theoretical optimum.

use bitvec::prelude::*;
use std::f64::consts::LN_2;

use crate::error::{FilterError, Result};

/// Bloom filter parameters
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilterParams {
    /// Number of bits in the filter (m)
    pub size_bits: usize,
    /// Number of hash probes per element (k)
    pub hash_count: usize,
    /// Expected false positive rate once `n` elements are inserted
    pub expected_fpr: f64,
}

/// Reject capacities and rates the sizing formulas cannot handle
///
/// `n == 0` divides by zero in the `k` formula; a rate outside `(0, 1)`
/// (NaN included) yields a negative or non-finite `m`.
pub fn validate_inputs(num_elements: usize, target_fpr: f64) -> Result<()> {
    if num_elements == 0 {
        return Err(FilterError::InvalidCapacity { n: num_elements });
    }

    // Written as a positive range check so NaN falls through to the error
    if !(target_fpr > 0.0 && target_fpr < 1.0) {
        return Err(FilterError::InvalidFalsePositiveRate { fpr: target_fpr });
    }

    Ok(())
}

/// Calculate optimal Bloom filter parameters for given constraints
///
/// # Arguments
/// * `num_elements` - Expected number of elements to insert (n)
/// * `target_fpr` - Target false positive rate, strictly inside (0, 1)
///
/// # Errors
/// * `InvalidCapacity` if `num_elements == 0`
/// * `InvalidFalsePositiveRate` if `target_fpr` is outside (0, 1)
/// * `FilterTooLarge` if the bit count is not addressable
pub fn calculate_optimal_parameters(
    num_elements: usize,
    target_fpr: f64,
) -> Result<BloomFilterParams> {
    validate_inputs(num_elements, target_fpr)?;

    let size_bits = minimum_bits(num_elements, target_fpr)?;
    let hash_count = optimal_k(size_bits, num_elements);
    let expected_fpr = calculate_fpr(size_bits, num_elements, hash_count);

    Ok(BloomFilterParams {
        size_bits,
        hash_count,
        expected_fpr,
    })
}

/// Calculate minimum m for given n and target FPR
///
/// Caller must pass inputs accepted by [`validate_inputs`].
pub fn minimum_bits(n: usize, target_fpr: f64) -> Result<usize> {
    let ln2_squared = LN_2 * LN_2;
    let bits = (-(n as f64) * target_fpr.ln() / ln2_squared).ceil();

    let max = BitSlice::<u8, Lsb0>::MAX_BITS;
    if !bits.is_finite() || bits > max as f64 {
        return Err(FilterError::FilterTooLarge { bits, max });
    }

    // ln(p) < 0 for p in (0, 1) and n >= 1, so bits >= 1 already; max() guards
    // against a rate so close to 1 that the product rounds to zero.
    Ok((bits as usize).max(1))
}

/// Calculate optimal k for given m and n, rounded up and at least 1
pub fn optimal_k(m: usize, n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    let k = ((m as f64 / n as f64) * LN_2).ceil() as usize;
    k.max(1)
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
