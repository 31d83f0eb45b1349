//! Core membership filter
//!
//! INVARIANTS:
//! - Bits are only ever set, never cleared.
//! - No false negatives: if inserted, `contains()` MUST return true.
//! - FPR ≈ (1 - e^(-kn/m))^k for n distinct inserted values.

use bitvec::prelude::*;
use tracing::debug;

use super::config::BloomConfig;
use super::hash_functions::compute_hash_positions;
use super::parameters::calculate_optimal_parameters;
use crate::error::FilterError;

/// Largest bit array the backing storage can address
pub const MAX_CAPACITY: usize = BitSlice::<u8, Lsb0>::MAX_BITS;

/// Upper bound on the number of hash functions
///
/// Keeps every seed distinct as a 32-bit value and `k` exact in FPR math.
pub const MAX_HASH_COUNT: usize = 1 << 16;

/// Reject dimensions no filter can be built with
pub fn check_dimensions(capacity: usize, hash_count: usize) -> Result<(), FilterError> {
    if capacity == 0 || capacity > MAX_CAPACITY || hash_count == 0 || hash_count > MAX_HASH_COUNT {
        return Err(FilterError::InvalidConfiguration {
            capacity,
            hash_count,
        });
    }
    Ok(())
}

/// Bloom filter over previously seen values
///
/// A fixed-size bit array addressed by `hash_count` seeded hash functions.
/// There is no removal and no reset: once a bit is set it stays set for
/// the lifetime of the filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloomFilter {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Number of hash functions (k)
    hash_count: usize,
    /// Size in bits (m)
    capacity: usize,
}

impl BloomFilter {
    /// Create an empty filter
    ///
    /// # Arguments
    /// * `capacity` - Size in bits, in `1..=MAX_CAPACITY`
    /// * `hash_count` - Number of hash functions, in `1..=MAX_HASH_COUNT`
    pub fn new(capacity: usize, hash_count: usize) -> Result<Self, FilterError> {
        check_dimensions(capacity, hash_count)?;

        debug!(capacity, hash_count, "Created membership filter");

        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; capacity],
            hash_count,
            capacity,
        })
    }

    /// Create a filter sized for `expected_items` at `target_fpr`
    pub fn with_fpr(expected_items: usize, target_fpr: f64) -> Result<Self, FilterError> {
        if !(target_fpr > 0.0 && target_fpr < 1.0) {
            return Err(FilterError::InvalidFpr { fpr: target_fpr });
        }
        let params = calculate_optimal_parameters(expected_items, target_fpr);
        Self::new(params.size_bits, params.hash_count)
    }

    /// Create a filter from a configuration
    pub fn from_config(config: &BloomConfig) -> Result<Self, FilterError> {
        config.validate()?;
        Self::new(config.capacity, config.hash_count)
    }

    /// Bit positions addressed by `element`, one per hash function, in seed order
    pub fn positions<T: AsRef<[u8]> + ?Sized>(&self, element: &T) -> Vec<usize> {
        compute_hash_positions(element.as_ref(), self.hash_count, self.capacity)
    }

    /// Insert an element into the filter
    ///
    /// Idempotent: a second insert of the same element changes nothing.
    pub fn insert<T: AsRef<[u8]> + ?Sized>(&mut self, element: &T) {
        for pos in self.positions(element) {
            self.bits.set(pos, true);
        }
    }

    /// Test if an element might be in the filter
    ///
    /// Returns:
    /// - `true` if the element might be in the set (could be false positive)
    /// - `false` if the element is definitely NOT in the set
    pub fn contains<T: AsRef<[u8]> + ?Sized>(&self, element: &T) -> bool {
        self.positions(element).iter().all(|&pos| self.bits[pos])
    }

    /// Test if an element might be in the filter, reading every position
    ///
    /// Gives the same answer as [`contains`](Self::contains) without the
    /// early exit, so lookup time does not depend on which bit is unset.
    pub fn contains_constant_time<T: AsRef<[u8]> + ?Sized>(&self, element: &T) -> bool {
        let mut result: u8 = 1;
        for pos in self.positions(element) {
            result &= self.bits[pos] as u8;
        }
        result == 1
    }

    /// Merge another filter into this one (OR operation)
    ///
    /// Afterwards this filter answers `true` for everything either filter
    /// held. Both filters must share `capacity` and `hash_count`.
    pub fn merge(&mut self, other: &BloomFilter) -> Result<(), FilterError> {
        if self.capacity != other.capacity || self.hash_count != other.hash_count {
            return Err(FilterError::IncompatibleFilters {
                left_capacity: self.capacity,
                left_hash_count: self.hash_count,
                right_capacity: other.capacity,
                right_hash_count: other.hash_count,
            });
        }

        let self_raw = self.bits.as_raw_mut_slice();
        let other_raw = other.bits.as_raw_slice();
        for (s, o) in self_raw.iter_mut().zip(other_raw.iter()) {
            *s |= *o;
        }
        Ok(())
    }

    /// Estimate the current false positive rate from bit occupancy
    ///
    /// `(bits_set / m)^k`. Uses only the bit array, never an item count.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.fill_ratio().powi(self.hash_count as i32)
    }

    /// Fraction of bits currently set
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.capacity as f64
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Read-only view of the bit array
    pub fn bits(&self) -> &BitSlice<u8, Lsb0> {
        &self.bits
    }

    /// Get the filter size in bits
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of hash functions
    pub fn hash_count(&self) -> usize {
        self.hash_count
    }
}
