//! Error types for the uniqueness filter

use thiserror::Error;

/// Errors that can occur when building or combining filters
///
/// Malformed candidates are never reported here: they are classified
/// as [`crate::Classification::Invalid`] and processing continues.
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("Invalid configuration: capacity={capacity}, hash_count={hash_count} (both must be >= 1 and within the filter's limits)")]
    InvalidConfiguration { capacity: usize, hash_count: usize },

    #[error("Invalid false positive rate: {fpr} (must be between 0 and 1, exclusive)")]
    InvalidFpr { fpr: f64 },

    #[error(
        "Cannot merge filters with different parameters: \
         (capacity={left_capacity}, k={left_hash_count}) vs (capacity={right_capacity}, k={right_hash_count})"
    )]
    IncompatibleFilters {
        left_capacity: usize,
        left_hash_count: usize,
        right_capacity: usize,
        right_hash_count: usize,
    },

    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),
}
