//! # Bloom Filter
//!
//! Fixed-size probabilistic set membership: a query answers "possibly added"
//! or "definitely not added", trading a tunable false positive rate for a
//! bit array far smaller than the set itself.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no I/O
//!   - `BloomFilter`: Bit array plus `add` / `contains`
//!   - `hash_functions`: FNV-1 and CRC-32 base hashes, double hashing
//!   - `parameters`: Optimal `m` and `k` for a capacity and target rate
//!   - `BloomConfig` / `BloomConfigBuilder`: Validated sizing inputs
//!
//! - **Errors** (`error`): `FilterError`, raised only at construction
//!
//! ## Invariants
//!
//! - **No false negatives**: if added, `contains()` MUST return true
//! - **Monotonic**: bits only go 0 -> 1; there is no removal or clear
//! - **Bounded FPR**: up to `n` adds, FPR = (1 - e^(-kn/m))^k ≈ target
//!
//! ## Concurrency
//!
//! No internal locking. `add` takes `&mut self`, `contains` takes `&self`;
//! wrap the filter in a `RwLock` to share it between threads.
//!
//! ## Usage Example
//!
//! ```
//! use bloom_filter::BloomFilter;
//!
//! let mut filter = BloomFilter::new(100, 0.01)?;
//! filter.add(b"test-data");
//!
//! assert!(filter.contains(b"test-data"));
//! assert!(!filter.contains(b"unrelated-data"));
//! # Ok::<(), bloom_filter::FilterError>(())
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{BloomConfig, BloomConfigBuilder, BloomFilter, BloomFilterParams};
pub use error::{FilterError, Result};
