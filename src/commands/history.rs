//! Diagnosis history for a user, newest first.

use chrono::DateTime;
use tracing::info;

use super::AppState;
use crate::error::MeowlyError;
use crate::history::{HistoryEntry, HistoryView};

const DISPLAY_DATE_FORMAT: &str = "%d %B %Y, %H:%M";

pub fn history(state: &AppState, user_id: i64) -> Result<Vec<HistoryView>, MeowlyError> {
    state.require_user(user_id)?;

    let entries = state.history().list_for_user(user_id)?;
    info!("Listed {} history entries for user {}", entries.len(), user_id);
    Ok(entries.into_iter().map(to_view).collect())
}

fn to_view(entry: HistoryEntry) -> HistoryView {
    HistoryView {
        id: entry.id,
        date: display_date(&entry.diagnosed_at),
        top_disease: entry.top_disease,
        top_percentage: entry.top_percentage,
        full_result: entry.full_result,
    }
}

fn display_date(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::accounts::register;
    use crate::commands::diagnose::{diagnose, DiagnoseRequest};

    #[test]
    fn test_display_date() {
        assert_eq!(
            display_date("2026-03-05T14:07:09.123456Z"),
            "05 March 2026, 14:07"
        );
        assert_eq!(display_date("not a date"), "not a date");
    }

    #[test]
    fn test_history_lists_user_diagnoses() {
        let state = AppState::in_memory().unwrap();
        let user = register(&state, "owner@example.com", "pw").unwrap();

        for symptoms in [vec!["G7"], vec!["G2", "G10"]] {
            diagnose(
                &state,
                &DiagnoseRequest {
                    user_id: user.id,
                    symptoms: symptoms.into_iter().map(String::from).collect(),
                },
            )
            .unwrap();
        }

        let views = history(&state, user.id).unwrap();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].top_disease, "Ear Mite");
        assert_eq!(views[1].top_disease, "Pruritus");
        assert!(!views[0].date.is_empty());
    }

    #[test]
    fn test_history_unknown_user() {
        let state = AppState::in_memory().unwrap();
        assert!(matches!(history(&state, 12), Err(MeowlyError::NotFound(_))));
    }
}
