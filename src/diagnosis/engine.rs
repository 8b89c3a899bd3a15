//! Rule evaluation engine for symptom-to-disease matching.
//!
//! The `DiagnosisEngine` scores every disease rule against a submitted
//! symptom set and produces a ranked candidate list.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use super::types::*;
use crate::knowledge::{DiseaseRule, KnowledgeBase};

/// The diagnosis engine.
///
/// Holds a shared, immutable knowledge base. Cloning the engine is cheap and
/// every clone scores against the same catalog; `diagnose` touches no shared
/// mutable state, so it may be called from any number of threads at once.
#[derive(Debug, Clone)]
pub struct DiagnosisEngine {
    kb: Arc<KnowledgeBase>,
}

impl DiagnosisEngine {
    /// Create a new engine over the given knowledge base.
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Score every disease against the submitted symptom codes.
    ///
    /// The submission is treated as a set: duplicates count once, and codes
    /// that no rule requires (including codes missing from the catalog) are
    /// ignored. A disease with no matched symptom is left out entirely; any
    /// overlap at all reports it, however small the percentage.
    ///
    /// # Returns
    /// `DiagnosisOutcome` with candidates sorted by match percentage
    /// (descending). Equal percentages keep the catalog's definition order.
    pub fn diagnose<I, S>(&self, submitted: I) -> DiagnosisOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let submission: HashSet<String> = submitted
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut candidates: Vec<Candidate> = self
            .kb
            .rules()
            .iter()
            .filter_map(|rule| score_rule(rule, &submission))
            .collect();

        // Stable sort keeps definition order among ties
        candidates.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));

        debug!(
            "Diagnosed {} submitted symptoms: {} candidate(s)",
            submission.len(),
            candidates.len()
        );

        DiagnosisOutcome::from_candidates(candidates)
    }
}

/// Score one rule, or `None` when no required symptom was submitted.
fn score_rule(rule: &DiseaseRule, submission: &HashSet<String>) -> Option<Candidate> {
    let matched = rule
        .required_symptoms()
        .iter()
        .filter(|code| submission.contains(code.as_str()))
        .count();

    if matched == 0 {
        return None;
    }

    let total = rule.total_symptoms();
    let percentage = round2(matched as f64 / total as f64 * 100.0);

    Some(Candidate {
        name: rule.name().to_string(),
        match_percentage: percentage,
        matched_symptoms_count: matched,
        total_symptoms: total,
        solution: rule.remedy_text(),
    })
}
