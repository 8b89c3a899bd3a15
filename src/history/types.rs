use serde::Serialize;

use crate::diagnosis::Candidate;

/// A stored diagnosis, as returned to the user who ran it.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub user_id: i64,
    /// Insert time, RFC 3339 UTC
    pub diagnosed_at: String,
    pub top_disease: String,
    pub top_percentage: f64,
    pub full_result: Vec<Candidate>,
}

/// History entry shaped for display, with a human-readable date.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    pub id: i64,
    pub date: String,
    pub top_disease: String,
    pub top_percentage: f64,
    pub full_result: Vec<Candidate>,
}
