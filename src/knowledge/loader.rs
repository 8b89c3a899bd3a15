//! TOML loading for the knowledge base.
//!
//! Provides two loading methods:
//! - `default_knowledge_base()` - Loads the catalog compiled into the binary
//! - `load_knowledge_base(path)` - Loads a custom catalog from a file path

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use super::catalog::KnowledgeBase;
use super::types::CatalogConfig;
use crate::error::KnowledgeBaseError;

/// Default catalog embedded in the binary at compile time.
const DEFAULT_CATALOG: &str = include_str!("../../config/knowledge_base.toml");

/// Parse and validate a catalog document.
pub fn knowledge_base_from_str(content: &str) -> Result<KnowledgeBase, KnowledgeBaseError> {
    let config: CatalogConfig = toml::from_str(content)?;
    KnowledgeBase::from_config(config)
}

/// Load a catalog from a TOML file at the given path.
///
/// # Returns
/// * `Ok(KnowledgeBase)` - Validated catalog
/// * `Err` - If the file cannot be read, the TOML is invalid, or a rule breaks integrity
pub fn load_knowledge_base(path: &Path) -> Result<KnowledgeBase> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read knowledge base {:?}", path))?;
    let kb = knowledge_base_from_str(&content)
        .with_context(|| format!("Knowledge base {:?} failed validation", path))?;
    info!(
        "Loaded knowledge base from {:?}: {} symptoms, {} diseases",
        path,
        kb.symptom_count(),
        kb.disease_count()
    );
    Ok(kb)
}

/// Get the catalog embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid or breaks integrity (this would be a compile-time bug).
pub fn default_knowledge_base() -> KnowledgeBase {
    knowledge_base_from_str(DEFAULT_CATALOG)
        .expect("embedded knowledge_base.toml must be a valid catalog")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_catalog_loads() {
        let kb = default_knowledge_base();
        assert_eq!(kb.symptom_count(), 44, "Should have G1..G44");
        assert_eq!(kb.disease_count(), 16, "Should have P1..P16");
    }

    #[test]
    fn test_default_catalog_has_expected_rules() {
        let kb = default_knowledge_base();

        let ringworm = kb.get_rule("P1").expect("P1 should exist");
        assert_eq!(ringworm.name(), "Ringworm / kurap / dermathopysis");
        assert_eq!(ringworm.required_symptoms(), ["G1", "G4", "G6", "G11"]);
        assert_eq!(ringworm.remedy_text().lines().count(), 6);

        let alopecia = kb.get_rule("P11").expect("P11 should exist");
        assert_eq!(alopecia.name(), "Alopecia");
        assert_eq!(alopecia.total_symptoms(), 1);

        let toxocara = kb.get_rule("P4").expect("P4 should exist");
        assert_eq!(toxocara.total_symptoms(), 12);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [[symptoms]]
            code = "S1"
            text = "Sneezing"

            [[diseases]]
            code = "D1"
            name = "Cat flu"
            symptoms = ["S1"]
            solution = ["a. Keep warm"]
            "#
        )
        .unwrap();

        let kb = load_knowledge_base(file.path()).unwrap();
        assert_eq!(kb.symptom_count(), 1);
        assert_eq!(kb.get_rule("D1").unwrap().name(), "Cat flu");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_knowledge_base(Path::new("/nonexistent/knowledge_base.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let result = knowledge_base_from_str("[[symptoms]]\ncode = 1");
        assert!(matches!(result, Err(KnowledgeBaseError::Parse(_))));
    }
}
