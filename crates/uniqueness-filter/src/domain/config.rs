//! Filter configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use uniqueness_filter::domain::BloomConfigBuilder;
//!
//! let config = BloomConfigBuilder::new()
//!     .expected_items(10_000)
//!     .target_fpr(0.001)
//!     .build()
//!     .expect("Valid config");
//! ```

use serde::{Deserialize, Serialize};

use super::bloom_filter::check_dimensions;
use super::parameters::calculate_optimal_parameters;
use crate::error::FilterError;

/// Environment variable overriding [`BloomConfig::capacity`]
pub const ENV_CAPACITY: &str = "PWCHECK_CAPACITY";
/// Environment variable overriding [`BloomConfig::hash_count`]
pub const ENV_HASH_COUNT: &str = "PWCHECK_HASH_COUNT";
/// Environment variable overriding [`BloomConfig::warn_fpr`]
pub const ENV_WARN_FPR: &str = "PWCHECK_WARN_FPR";

/// Membership filter configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloomConfig {
    /// Size of the bit array (m)
    pub capacity: usize,
    /// Number of hash functions (k)
    pub hash_count: usize,
    /// Estimated FPR above which a classification run logs a warning
    pub warn_fpr: f64,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            hash_count: 5,
            warn_fpr: 0.05,
        }
    }
}

impl BloomConfig {
    /// Create a new configuration with validation
    pub fn new(capacity: usize, hash_count: usize, warn_fpr: f64) -> Result<Self, FilterError> {
        let config = Self {
            capacity,
            hash_count,
            warn_fpr,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        check_dimensions(self.capacity, self.hash_count)?;

        if !(self.warn_fpr > 0.0 && self.warn_fpr <= 1.0) {
            return Err(FilterError::InvalidFpr { fpr: self.warn_fpr });
        }

        Ok(())
    }

    /// Load configuration from `PWCHECK_*` environment variables over defaults
    pub fn from_env() -> Result<Self, FilterError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset variables keep their default. A set but unparsable value is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FilterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_CAPACITY) {
            config.capacity = parse_var(ENV_CAPACITY, &raw)?;
        }
        if let Some(raw) = lookup(ENV_HASH_COUNT) {
            config.hash_count = parse_var(ENV_HASH_COUNT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_WARN_FPR) {
            config.warn_fpr = parse_var(ENV_WARN_FPR, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, FilterError> {
    raw.trim()
        .parse()
        .map_err(|_| FilterError::InvalidParameters(format!("{key}={raw:?} is not a valid value")))
}

/// Builder for BloomConfig with validation
///
/// Explicit `capacity`/`hash_count` win. Otherwise, when `expected_items`
/// is set, both are derived from it and `target_fpr` (default 1%).
#[derive(Default)]
pub struct BloomConfigBuilder {
    capacity: Option<usize>,
    hash_count: Option<usize>,
    warn_fpr: Option<f64>,
    expected_items: Option<usize>,
    target_fpr: Option<f64>,
}

impl BloomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bit array size
    pub fn capacity(mut self, bits: usize) -> Self {
        self.capacity = Some(bits);
        self
    }

    /// Set the number of hash functions
    pub fn hash_count(mut self, k: usize) -> Self {
        self.hash_count = Some(k);
        self
    }

    /// Set the warning threshold for the estimated FPR
    pub fn warn_fpr(mut self, fpr: f64) -> Self {
        self.warn_fpr = Some(fpr);
        self
    }

    /// Size the filter for this many distinct passwords
    pub fn expected_items(mut self, n: usize) -> Self {
        self.expected_items = Some(n);
        self
    }

    /// Target false positive rate used with `expected_items`
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Build the BloomConfig, validating all parameters
    pub fn build(self) -> Result<BloomConfig, FilterError> {
        let defaults = BloomConfig::default();

        let derived = match self.expected_items {
            Some(n) => {
                let fpr = self.target_fpr.unwrap_or(0.01);
                if !(fpr > 0.0 && fpr < 1.0) {
                    return Err(FilterError::InvalidFpr { fpr });
                }
                Some(calculate_optimal_parameters(n, fpr))
            }
            None => None,
        };

        let config = BloomConfig {
            capacity: self
                .capacity
                .or(derived.as_ref().map(|p| p.size_bits))
                .unwrap_or(defaults.capacity),
            hash_count: self
                .hash_count
                .or(derived.as_ref().map(|p| p.hash_count))
                .unwrap_or(defaults.hash_count),
            warn_fpr: self.warn_fpr.unwrap_or(defaults.warn_fpr),
        };

        config.validate()?;
        Ok(config)
    }
}
