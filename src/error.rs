use thiserror::Error;

/// Integrity violations found while building the knowledge base.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("Invalid knowledge base document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate symptom code: {0}")]
    DuplicateSymptom(String),

    #[error("Duplicate disease code: {0}")]
    DuplicateDisease(String),

    #[error("Disease {0} has no required symptoms")]
    EmptyRule(String),

    #[error("Disease {disease} lists symptom {symptom} more than once")]
    DuplicateRuleSymptom { disease: String, symptom: String },

    #[error("Disease {disease} references unknown symptom {symptom}")]
    UnknownSymptom { disease: String, symptom: String },

    #[error("Disease {0} has no remedy")]
    EmptyRemedy(String),
}

#[derive(Debug, Error)]
pub enum MeowlyError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl From<MeowlyError> for String {
    fn from(err: MeowlyError) -> Self {
        err.to_string()
    }
}
