//! Output types for the diagnosis engine.
//!
//! Candidates serialize to JSON for callers and deserialize back when read
//! from diagnosis history.

use serde::{Deserialize, Serialize};

pub const MATCHES_FOUND_MESSAGE: &str = "diagnosis results found";
pub const NO_MATCH_MESSAGE: &str = "no disease matches the given symptoms";

/// One disease's score for a given submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Disease display name
    pub name: String,
    /// `100 * matched / total`, rounded to 2 decimals
    pub match_percentage: f64,
    /// How many of the disease's symptoms were submitted
    pub matched_symptoms_count: usize,
    /// Size of the disease's required symptom set
    pub total_symptoms: usize,
    /// Care recommendations, newline separated
    pub solution: String,
}

/// Complete result of a diagnosis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisOutcome {
    pub message: String,
    /// Ranked candidates, highest match first
    pub results: Vec<Candidate>,
}

impl DiagnosisOutcome {
    pub(crate) fn from_candidates(results: Vec<Candidate>) -> Self {
        let message = if results.is_empty() {
            NO_MATCH_MESSAGE
        } else {
            MATCHES_FOUND_MESSAGE
        };
        Self {
            message: message.to_string(),
            results,
        }
    }

    /// The best-ranked candidate, if any disease matched.
    pub fn top(&self) -> Option<&Candidate> {
        self.results.first()
    }

    pub fn has_matches(&self) -> bool {
        !self.results.is_empty()
    }
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
