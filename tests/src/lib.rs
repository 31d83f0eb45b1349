//! # Uniqueness Filter Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs    # End-to-end classification runs
//!     └── properties.rs   # Filter and policy properties (proptest)
//! tests/benches/
//! └── filter_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p uniqueness-tests
//! cargo test -p uniqueness-tests integration::properties::
//! cargo bench -p uniqueness-tests
//! ```
