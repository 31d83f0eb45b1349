//! Metrics hooks for classification runs
//!
//! Counts lookups, inserts and per-label outcomes so callers can watch the
//! observed positive rate drift upward as the filter fills.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use uniqueness_filter::{BloomFilter, Metrics, UniquenessService};
//!
//! let metrics = Arc::new(Metrics::new());
//! let mut filter = BloomFilter::new(1000, 5)?;
//! let mut service = UniquenessService::new(&mut filter).with_metrics(metrics.clone());
//! service.classify(["guest"]);
//! println!("{:?}", metrics.snapshot());
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::domain::Classification;

/// Metrics collector for filter and classification operations
#[derive(Default)]
pub struct Metrics {
    /// Total lookups performed
    pub lookups_performed: AtomicU64,
    /// Lookups that answered "possibly present"
    pub lookups_positive: AtomicU64,
    /// Total values inserted
    pub elements_inserted: AtomicU64,
    /// Candidates classified `unique`
    pub classified_unique: AtomicU64,
    /// Candidates classified `duplicate`
    pub classified_duplicate: AtomicU64,
    /// Candidates classified `invalid`
    pub classified_invalid: AtomicU64,
    /// Cumulative lookup time in nanoseconds
    pub lookup_time_ns: AtomicU64,
    /// Cumulative insert time in nanoseconds
    pub insert_time_ns: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_insert(&self, duration: Duration) {
        self.elements_inserted.fetch_add(1, Ordering::Relaxed);
        self.insert_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Record lookup operation
    ///
    /// # Arguments
    /// * `duration` - Time taken for lookup
    /// * `found` - Whether the element was found (possibly false positive)
    pub fn record_lookup(&self, duration: Duration, found: bool) {
        self.lookups_performed.fetch_add(1, Ordering::Relaxed);
        self.lookup_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        if found {
            self.lookups_positive.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_classification(&self, classification: Classification) {
        let counter = match classification {
            Classification::Unique => &self.classified_unique,
            Classification::Duplicate => &self.classified_duplicate,
            Classification::Invalid => &self.classified_invalid,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            lookups_performed: self.lookups_performed.load(Ordering::Relaxed),
            lookups_positive: self.lookups_positive.load(Ordering::Relaxed),
            elements_inserted: self.elements_inserted.load(Ordering::Relaxed),
            classified_unique: self.classified_unique.load(Ordering::Relaxed),
            classified_duplicate: self.classified_duplicate.load(Ordering::Relaxed),
            classified_invalid: self.classified_invalid.load(Ordering::Relaxed),
            avg_lookup_ns: self.avg_lookup_time_ns(),
            avg_insert_ns: self.avg_insert_time_ns(),
        }
    }

    pub fn avg_lookup_time_ns(&self) -> u64 {
        let total = self.lookup_time_ns.load(Ordering::Relaxed);
        let count = self.lookups_performed.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    pub fn avg_insert_time_ns(&self) -> u64 {
        let total = self.insert_time_ns.load(Ordering::Relaxed);
        let count = self.elements_inserted.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Ratio of positive lookups to total lookups
    ///
    /// Includes true duplicates as well as false positives.
    pub fn observed_positive_rate(&self) -> f64 {
        let total = self.lookups_performed.load(Ordering::Relaxed);
        let positive = self.lookups_positive.load(Ordering::Relaxed);
        if total > 0 {
            positive as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub lookups_performed: u64,
    pub lookups_positive: u64,
    pub elements_inserted: u64,
    pub classified_unique: u64,
    pub classified_duplicate: u64,
    pub classified_invalid: u64,
    pub avg_lookup_ns: u64,
    pub avg_insert_ns: u64,
}

/// Trait for custom metrics recording implementations
///
/// Implement this trait to forward counts to an external metrics system.
pub trait MetricsRecorder: Send + Sync {
    fn record_lookup(&self, duration: Duration, found: bool);

    fn record_insert(&self, duration: Duration);

    fn record_classification(&self, classification: Classification);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_lookup(&self, _: Duration, _: bool) {}
    fn record_insert(&self, _: Duration) {}
    fn record_classification(&self, _: Classification) {}
}

impl MetricsRecorder for Metrics {
    fn record_lookup(&self, duration: Duration, found: bool) {
        Metrics::record_lookup(self, duration, found);
    }

    fn record_insert(&self, duration: Duration) {
        Metrics::record_insert(self, duration);
    }

    fn record_classification(&self, classification: Classification) {
        Metrics::record_classification(self, classification);
    }
}
