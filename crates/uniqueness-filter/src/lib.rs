//! # Uniqueness Filter
//!
//! Password reuse detection with a Bloom filter: "has this value been seen
//! before?" with no false negatives and a tunable false positive rate.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: Core probabilistic data structure
//!   - `Candidate`: A submitted value, including malformed ones
//!   - `Classification`: `invalid` / `duplicate` / `unique`
//!   - `BloomConfig`, `BloomConfigBuilder`: Configuration with validation
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `UniquenessApi`: Driving port (classify candidates)
//!   - `MembershipFilter`: Driven port (insert/contains)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `UniquenessService`: Implements `UniquenessApi`
//!
//! ## Invariants
//!
//! - Bits are only ever set, never cleared. There is no delete.
//! - No false negatives: if inserted, `contains()` MUST return true.
//! - FPR ≈ (1 - e^(-kn/m))^k for n distinct values in m bits with k hashes.
//!
//! ## Usage Example
//!
//! ```ignore
//! use uniqueness_filter::{classify, BloomFilter, Classification};
//!
//! let mut filter = BloomFilter::new(1000, 5)?;
//! filter.insert("password123");
//!
//! let results = classify(&mut filter, [Some("password123"), Some("guest"), None]);
//! assert_eq!(results[&"guest".into()], Classification::Unique);
//! ```

pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{
    BloomConfig, BloomConfigBuilder, BloomFilter, Candidate, Classification, ClassificationMap,
    ClassificationReport,
};
pub use error::FilterError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{MembershipFilter, UniquenessApi};
pub use service::{classify, UniquenessService};
