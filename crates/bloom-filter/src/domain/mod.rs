//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Core Bloom filter implementation
//! - Hash functions and double hashing
//! - Parameter calculations
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;

pub use bloom_filter::BloomFilter;
pub use config::{BloomConfig, BloomConfigBuilder};
pub use hash_functions::{probe_positions, DoubleHash, ProbePositions};
pub use parameters::{calculate_fpr, calculate_optimal_parameters, BloomFilterParams};
