//! The validated, read-only knowledge base.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::types::*;
use crate::error::KnowledgeBaseError;

/// Symptom catalog plus disease rules, checked for integrity at construction.
///
/// Immutable once built. Share it behind an `Arc`; no locking is needed.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    symptoms: Vec<Symptom>,
    symptom_index: HashMap<String, usize>,
    diseases: Vec<DiseaseRule>,
    disease_index: HashMap<String, usize>,
}

impl KnowledgeBase {
    /// Build the knowledge base from a parsed catalog document.
    ///
    /// Fails on the first integrity violation instead of dropping the
    /// offending entry.
    pub fn from_config(config: CatalogConfig) -> Result<Self, KnowledgeBaseError> {
        let mut symptoms = Vec::with_capacity(config.symptoms.len());
        let mut symptom_index = HashMap::with_capacity(config.symptoms.len());

        for def in config.symptoms {
            if symptom_index.contains_key(&def.code) {
                return Err(KnowledgeBaseError::DuplicateSymptom(def.code));
            }
            symptom_index.insert(def.code.clone(), symptoms.len());
            symptoms.push(Symptom {
                code: def.code,
                text: def.text,
            });
        }

        let mut diseases = Vec::with_capacity(config.diseases.len());
        let mut disease_index = HashMap::with_capacity(config.diseases.len());

        for def in config.diseases {
            if disease_index.contains_key(&def.code) {
                return Err(KnowledgeBaseError::DuplicateDisease(def.code));
            }
            if def.symptoms.is_empty() {
                return Err(KnowledgeBaseError::EmptyRule(def.code));
            }
            if def.solution.is_empty() {
                return Err(KnowledgeBaseError::EmptyRemedy(def.code));
            }

            {
                let mut seen = HashSet::with_capacity(def.symptoms.len());
                for symptom in &def.symptoms {
                    if !symptom_index.contains_key(symptom) {
                        return Err(KnowledgeBaseError::UnknownSymptom {
                            disease: def.code,
                            symptom: symptom.clone(),
                        });
                    }
                    if !seen.insert(symptom.as_str()) {
                        return Err(KnowledgeBaseError::DuplicateRuleSymptom {
                            disease: def.code,
                            symptom: symptom.clone(),
                        });
                    }
                }
            }

            disease_index.insert(def.code.clone(), diseases.len());
            diseases.push(DiseaseRule {
                code: def.code,
                name: def.name,
                required: def.symptoms,
                remedy: def.solution,
            });
        }

        debug!(
            "Built knowledge base with {} symptoms and {} diseases",
            symptoms.len(),
            diseases.len()
        );

        Ok(Self {
            symptoms,
            symptom_index,
            diseases,
            disease_index,
        })
    }

    /// All known symptoms in catalog order.
    pub fn list_symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// All diseases sorted by name, with symptom codes resolved to their text.
    pub fn list_diseases(&self) -> Vec<DiseaseSummary> {
        let mut summaries: Vec<DiseaseSummary> = self
            .diseases
            .iter()
            .map(|rule| DiseaseSummary {
                name: rule.name.clone(),
                symptoms: rule
                    .required
                    .iter()
                    .filter_map(|code| self.symptom(code))
                    .map(|s| s.text.clone())
                    .collect(),
                solution: rule.remedy_text(),
            })
            .collect();

        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }

    /// Look up a disease rule by code.
    pub fn get_rule(&self, disease_code: &str) -> Option<&DiseaseRule> {
        self.disease_index
            .get(disease_code)
            .map(|&i| &self.diseases[i])
    }

    /// Disease rules in definition order.
    pub fn rules(&self) -> &[DiseaseRule] {
        &self.diseases
    }

    pub fn symptom(&self, code: &str) -> Option<&Symptom> {
        self.symptom_index.get(code).map(|&i| &self.symptoms[i])
    }

    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }

    pub fn disease_count(&self) -> usize {
        self.diseases.len()
    }
}
