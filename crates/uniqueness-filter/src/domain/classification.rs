//! Classification labels and per-run results

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::candidate::Candidate;

/// Outcome of checking one candidate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Not a usable password (null, non-string, empty or whitespace-only)
    Invalid,
    /// Possibly seen before (may be a false positive)
    Duplicate,
    /// Definitely not seen before; now registered
    Unique,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Invalid => "invalid",
            Classification::Duplicate => "duplicate",
            Classification::Unique => "unique",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Results of one classification run, keyed by candidate as supplied
///
/// Keys keep the position of their first occurrence. A candidate that
/// appears twice keeps only its last label.
///
/// Non-string candidates are keyed by their JSON text, so `1`, `1.0` and
/// `true` are three separate entries, as are `"1"` and `1`.
pub type ClassificationMap = IndexMap<Candidate, Classification>;

/// Per-label counts over a [`ClassificationMap`]
///
/// Counts entries of the map, so collapsed repeated keys count once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub unique: usize,
    pub duplicate: usize,
    pub invalid: usize,
    pub total: usize,
}

impl ClassificationReport {
    pub fn from_results(results: &ClassificationMap) -> Self {
        let mut report = Self::default();
        for classification in results.values() {
            match classification {
                Classification::Unique => report.unique += 1,
                Classification::Duplicate => report.duplicate += 1,
                Classification::Invalid => report.invalid += 1,
            }
            report.total += 1;
        }
        report
    }
}
