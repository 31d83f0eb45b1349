//! Domain Layer - Pure logic
//!
//! This layer contains:
//! - Membership filter (bit array + seeded hash family)
//! - Parameter calculations
//! - Configuration
//! - Candidates and classification labels
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod bloom_filter;
pub mod candidate;
pub mod classification;
pub mod config;
pub mod hash_functions;
pub mod parameters;

pub use bloom_filter::{BloomFilter, MAX_CAPACITY, MAX_HASH_COUNT};
pub use candidate::Candidate;
pub use classification::{Classification, ClassificationMap, ClassificationReport};
pub use config::{BloomConfig, BloomConfigBuilder};
pub use parameters::{calculate_fpr, calculate_optimal_parameters, BloomFilterParams};
