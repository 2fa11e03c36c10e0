//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - No false negatives: once added, `contains()` MUST return true
//! - Bits only go 0 -> 1; nothing clears them
//! - `m` and `k` are fixed at construction, both >= 1

use bitvec::prelude::*;
use tracing::{debug, warn};

use super::config::BloomConfig;
use super::hash_functions::probe_positions;
use super::parameters::{calculate_fpr, calculate_optimal_parameters};
use crate::error::Result;

/// Bloom filter for probabilistic membership testing
///
/// A Bloom filter is a space-efficient probabilistic data structure that
/// can test whether an element is a member of a set. False positives are
/// possible, but false negatives are not.
///
/// `add` needs `&mut self`, so sharing one filter between threads takes an
/// external lock such as `RwLock<BloomFilter>`.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    /// Bit array storing the filter state, exactly `m` bits long
    bits: BitVec<u8, Lsb0>,
    /// Number of hash probes (k)
    k: usize,
    /// Size in bits (m)
    m: usize,
    /// Designed capacity (n)
    capacity: usize,
    /// Target false positive rate at capacity (p)
    target_fpr: f64,
    /// Number of `add` calls, duplicates included
    added: usize,
}

impl BloomFilter {
    /// Create a Bloom filter sized for `expected_elements` at `target_fpr`
    ///
    /// # Arguments
    /// * `expected_elements` - Expected number of elements (n), at least 1
    /// * `target_fpr` - Target false positive rate, strictly inside (0, 1)
    ///
    /// # Errors
    /// Fails without allocating if either argument is out of range.
    pub fn new(expected_elements: usize, target_fpr: f64) -> Result<Self> {
        let params = calculate_optimal_parameters(expected_elements, target_fpr)?;

        debug!(
            size_bits = params.size_bits,
            hash_count = params.hash_count,
            capacity = expected_elements,
            target_fpr,
            "Created Bloom filter"
        );

        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; params.size_bits],
            k: params.hash_count,
            m: params.size_bits,
            capacity: expected_elements,
            target_fpr,
            added: 0,
        })
    }

    /// Create a Bloom filter from a configuration
    pub fn from_config(config: &BloomConfig) -> Result<Self> {
        Self::new(config.expected_elements, config.target_fpr)
    }

    /// Add an element to the filter
    ///
    /// After this returns, `contains(element)` is guaranteed to return true.
    /// Adding past capacity is allowed; only the FPR guarantee degrades.
    pub fn add(&mut self, element: &[u8]) {
        for pos in probe_positions(element, self.k, self.m) {
            self.bits.set(pos, true);
        }

        self.added = self.added.saturating_add(1);
        if self.capacity.checked_add(1) == Some(self.added) {
            warn!(
                capacity = self.capacity,
                target_fpr = self.target_fpr,
                "Bloom filter exceeded its designed capacity; false positive rate will rise above target"
            );
        }
    }

    /// Test if an element might be in the filter
    ///
    /// Returns:
    /// - `true` if the element might be in the set (could be false positive)
    /// - `false` if the element is definitely NOT in the set (never false negative)
    ///
    /// Stops at the first probe that hits a clear bit.
    pub fn contains(&self, element: &[u8]) -> bool {
        probe_positions(element, self.k, self.m).all(|pos| self.bits[pos])
    }

    /// Estimate the current false positive rate from the number of adds
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k. Duplicate adds are counted, so
    /// this overestimates when the same element is added twice.
    pub fn estimated_fpr(&self) -> f64 {
        calculate_fpr(self.m, self.added, self.k)
    }

    /// Whether more elements were added than the filter was sized for
    pub fn is_over_capacity(&self) -> bool {
        self.added > self.capacity
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Get the filter size in bits (m)
    pub fn size_bits(&self) -> usize {
        self.m
    }

    /// Get the number of hash probes (k)
    pub fn hash_count(&self) -> usize {
        self.k
    }

    /// Get the designed capacity (n)
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the target false positive rate (p)
    pub fn target_fpr(&self) -> f64 {
        self.target_fpr
    }

    /// Get the number of `add` calls so far
    pub fn elements_added(&self) -> usize {
        self.added
    }
}
