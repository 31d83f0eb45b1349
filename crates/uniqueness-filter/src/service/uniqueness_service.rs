//! Password Uniqueness Service
//!
//! Validates candidates, queries the membership filter, and registers
//! first-seen values. One service borrows one filter exclusively for the
//! length of a run, so every insert is visible to the next lookup.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::domain::{
    BloomConfig, Candidate, Classification, ClassificationMap, ClassificationReport,
};
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{MembershipFilter, UniquenessApi};

/// Uniqueness service implementation
///
/// Implements the `UniquenessApi` port over any [`MembershipFilter`].
pub struct UniquenessService<'a, F: MembershipFilter> {
    /// Filter shared across every candidate of the run
    filter: &'a mut F,
    /// Metrics sink
    metrics: Arc<dyn MetricsRecorder>,
    /// Estimated FPR above which a run logs a warning
    warn_fpr: f64,
}

impl<'a, F: MembershipFilter> UniquenessService<'a, F> {
    /// Create a service over `filter` with metrics disabled
    pub fn new(filter: &'a mut F) -> Self {
        Self {
            filter,
            metrics: Arc::new(NoOpMetrics),
            warn_fpr: BloomConfig::default().warn_fpr,
        }
    }

    /// Attach a metrics recorder
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Set the estimated FPR threshold for degradation warnings
    pub fn with_warn_fpr(mut self, warn_fpr: f64) -> Self {
        self.warn_fpr = warn_fpr;
        self
    }

    /// Register known values without classifying them
    ///
    /// Values are inserted as given; no validity check is applied.
    pub fn preload<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0usize;
        for value in values {
            self.insert_timed(value.as_ref());
            count += 1;
        }
        debug!(count, "Preloaded known passwords");
    }

    /// Read access to the underlying filter
    pub fn filter(&self) -> &F {
        &*self.filter
    }

    fn insert_timed(&mut self, value: &str) {
        let start = Instant::now();
        self.filter.insert(value);
        self.metrics.record_insert(start.elapsed());
    }

    fn check_saturation(&self) {
        let fpr = self.filter.estimated_false_positive_rate();
        if fpr > self.warn_fpr {
            warn!(
                estimated_fpr = fpr,
                threshold = self.warn_fpr,
                "Membership filter is saturating; duplicate verdicts are increasingly unreliable"
            );
        }
    }
}

impl<F: MembershipFilter> UniquenessApi for UniquenessService<'_, F> {
    fn classify_one(&mut self, candidate: &Candidate) -> Classification {
        let classification = match candidate.valid_text() {
            None => Classification::Invalid,
            Some(value) => {
                let start = Instant::now();
                let seen = self.filter.contains(value);
                self.metrics.record_lookup(start.elapsed(), seen);

                if seen {
                    Classification::Duplicate
                } else {
                    self.insert_timed(value);
                    Classification::Unique
                }
            }
        };

        self.metrics.record_classification(classification);
        classification
    }

    fn classify<I>(&mut self, candidates: I) -> ClassificationMap
    where
        I: IntoIterator,
        I::Item: Into<Candidate>,
    {
        let mut results = ClassificationMap::new();

        for candidate in candidates {
            let candidate = candidate.into();
            let classification = self.classify_one(&candidate);
            // Same key again: label is overwritten, position kept
            results.insert(candidate, classification);
        }

        let report = ClassificationReport::from_results(&results);
        info!(
            unique = report.unique,
            duplicate = report.duplicate,
            invalid = report.invalid,
            total = report.total,
            "Classification run complete"
        );
        self.check_saturation();

        results
    }
}

/// Classify `candidates` against `filter` with default settings
pub fn classify<F, I>(filter: &mut F, candidates: I) -> ClassificationMap
where
    F: MembershipFilter,
    I: IntoIterator,
    I::Item: Into<Candidate>,
{
    UniquenessService::new(filter).classify(candidates)
}
