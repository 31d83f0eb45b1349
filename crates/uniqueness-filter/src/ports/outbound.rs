//! Outbound Ports (Driven Ports)
//!
//! The classification service only needs insert/query over strings, so it
//! is written against this trait rather than a concrete filter.

use crate::domain::BloomFilter;

/// Approximate set membership over strings (Driven Port)
///
/// Implementations must never produce false negatives: after
/// `insert(v)`, `contains(v)` is true for the rest of the filter's life.
pub trait MembershipFilter {
    /// Register a value
    fn insert(&mut self, value: &str);

    /// Whether a value might have been registered
    fn contains(&self, value: &str) -> bool;

    /// Current estimated probability that `contains` answers true for an
    /// unregistered value
    fn estimated_false_positive_rate(&self) -> f64;
}

impl MembershipFilter for BloomFilter {
    fn insert(&mut self, value: &str) {
        BloomFilter::insert(self, value);
    }

    fn contains(&self, value: &str) -> bool {
        BloomFilter::contains(self, value)
    }

    fn estimated_false_positive_rate(&self) -> f64 {
        BloomFilter::estimated_false_positive_rate(self)
    }
}
