use tracing::info;

use super::AppState;
use crate::knowledge::{DiseaseSummary, Symptom};

/// All symptoms in catalog order.
pub fn list_symptoms(state: &AppState) -> Vec<Symptom> {
    let symptoms = state.engine.knowledge_base().list_symptoms().to_vec();
    info!("Listed {} symptoms", symptoms.len());
    symptoms
}

/// All diseases sorted by name, symptom codes resolved to text.
pub fn list_diseases(state: &AppState) -> Vec<DiseaseSummary> {
    let diseases = state.engine.knowledge_base().list_diseases();
    info!("Listed {} diseases", diseases.len());
    diseases
}
