//! Input and output documents for the `pwcheck` binary

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uniqueness_filter::{Candidate, Classification, ClassificationMap, ClassificationReport};

/// Passwords already in use
pub const DEMO_EXISTING: [&str; 3] = ["password123", "admin123", "qwerty123"];

/// A check request: values to preload, then values to classify
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CheckInput {
    /// Known passwords registered before classification
    #[serde(default)]
    pub existing: Vec<String>,
    /// Arbitrary JSON values to classify, in order
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl CheckInput {
    /// The built-in demonstration run
    pub fn demo() -> Self {
        Self {
            existing: DEMO_EXISTING.iter().map(|s| s.to_string()).collect(),
            candidates: vec![
                Candidate::from("password123"),
                Candidate::from("newpassword"),
                Candidate::from("admin123"),
                Candidate::from("guest"),
                Candidate::from(""),
                Candidate::Null,
            ],
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Malformed input file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Expected {\"existing\": [...], \"candidates\": [...]}")
    }
}

/// Printed result of a check run
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    /// `[candidate, label]` pairs in first-occurrence order
    pub results: Vec<(Candidate, Classification)>,
    pub report: ClassificationReport,
}

impl CheckOutput {
    pub fn new(results: ClassificationMap) -> Self {
        let report = ClassificationReport::from_results(&results);
        Self {
            results: results.into_iter().collect(),
            report,
        }
    }
}
