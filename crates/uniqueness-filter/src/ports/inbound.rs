//! Inbound Ports (Driving Ports)
//!
//! The API that drivers (CLI, other services) use to classify candidates.

use crate::domain::{Candidate, Classification, ClassificationMap};

/// Password uniqueness API (Driving Port)
pub trait UniquenessApi {
    /// Classify a single candidate, registering it if it is new
    fn classify_one(&mut self, candidate: &Candidate) -> Classification;

    /// Classify candidates in order
    ///
    /// Every `unique` value is registered before the next candidate is
    /// looked at, so a later repeat in the same run is a `duplicate`.
    /// Repeated keys collapse to one entry holding the last label.
    fn classify<I>(&mut self, candidates: I) -> ClassificationMap
    where
        I: IntoIterator,
        I::Item: Into<Candidate>;
}
