use serde::Deserialize;
use tracing::{info, warn};

use super::AppState;
use crate::diagnosis::DiagnosisOutcome;
use crate::error::MeowlyError;

#[derive(Debug, Clone, Deserialize)]
pub struct DiagnoseRequest {
    pub user_id: i64,
    pub symptoms: Vec<String>,
}

/// Diagnose on behalf of a registered user.
///
/// When anything matched, the top candidate and the full list are written to
/// the user's history. A failed write is logged and otherwise ignored: the
/// returned outcome is the same either way.
pub fn diagnose(
    state: &AppState,
    request: &DiagnoseRequest,
) -> Result<DiagnosisOutcome, MeowlyError> {
    if request.symptoms.is_empty() {
        return Err(MeowlyError::Validation("At least one symptom code is required".to_string()));
    }
    state.require_user(request.user_id)?;

    let outcome = state.engine.diagnose(&request.symptoms);
    info!(
        "User {} diagnosis: {} candidate(s) from {} symptom(s)",
        request.user_id,
        outcome.results.len(),
        request.symptoms.len()
    );

    if outcome.has_matches() {
        if let Err(e) = state.history().record(request.user_id, &outcome.results) {
            warn!("Failed to record diagnosis for user {}: {}", request.user_id, e);
        }
    }

    Ok(outcome)
}
