//! Type definitions for the symptom catalog.
//!
//! Definition types are deserialized from the TOML catalog; the rest are the
//! validated, read-only shapes handed to the engine and to callers.

use serde::{Deserialize, Serialize};

// =============================================================================
// CONFIGURATION TYPES (loaded from TOML)
// =============================================================================

/// Root document loaded from knowledge_base.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Symptoms in catalog order
    pub symptoms: Vec<SymptomDefinition>,
    /// Disease rules in definition order
    pub diseases: Vec<DiseaseDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymptomDefinition {
    pub code: String,
    pub text: String,
}

/// A disease rule as written in the catalog document.
#[derive(Debug, Clone, Deserialize)]
pub struct DiseaseDefinition {
    /// Unique disease code (e.g., "P1")
    pub code: String,
    /// Display name
    pub name: String,
    /// Symptom codes that make up this disease
    pub symptoms: Vec<String>,
    /// Care recommendations, one per line
    pub solution: Vec<String>,
}

// =============================================================================
// CATALOG TYPES
// =============================================================================

/// A known, observable sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symptom {
    pub code: String,
    pub text: String,
}

/// A validated disease rule.
///
/// Only constructed by [`KnowledgeBase`](super::KnowledgeBase), so every
/// required code is known to exist in the catalog and appears once.
#[derive(Debug, Clone)]
pub struct DiseaseRule {
    pub(super) code: String,
    pub(super) name: String,
    pub(super) required: Vec<String>,
    pub(super) remedy: Vec<String>,
}

impl DiseaseRule {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Required symptom codes, in the order the catalog lists them.
    pub fn required_symptoms(&self) -> &[String] {
        &self.required
    }

    pub fn total_symptoms(&self) -> usize {
        self.required.len()
    }

    pub fn requires(&self, symptom_code: &str) -> bool {
        self.required.iter().any(|c| c == symptom_code)
    }

    /// Remedy lines joined with newlines, as shown to callers.
    pub fn remedy_text(&self) -> String {
        self.remedy.join("\n")
    }
}

/// A disease as listed for browsing: symptom codes resolved to their text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseSummary {
    pub name: String,
    pub symptoms: Vec<String>,
    pub solution: String,
}
