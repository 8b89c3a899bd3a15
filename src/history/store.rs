use std::path::Path;

use chrono::{SecondsFormat, Utc};
use rusqlite::{params, Connection};
use tracing::info;

use super::types::HistoryEntry;
use crate::diagnosis::Candidate;
use crate::error::MeowlyError;

/// SQLite store for diagnosis history.
/// All operations are synchronous (rusqlite is blocking).
pub struct DiagnosisHistory {
    conn: Connection,
}

impl DiagnosisHistory {
    /// Create or open the history database at the given path.
    pub fn new(db_path: &Path) -> Result<Self, MeowlyError> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| MeowlyError::Storage(format!("Failed to create data dir: {}", e)))?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| MeowlyError::Storage(format!("Failed to open history db: {}", e)))?;
        let store = Self::with_connection(conn)?;

        info!("Opened diagnosis history database at {:?}", db_path);
        Ok(store)
    }

    /// In-memory history, gone when dropped.
    pub fn in_memory() -> Result<Self, MeowlyError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| MeowlyError::Storage(format!("Failed to open history db: {}", e)))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, MeowlyError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS diagnosis_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                diagnosed_at TEXT NOT NULL,
                top_disease TEXT NOT NULL,
                top_percentage REAL NOT NULL,
                full_result_json TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_history_user ON diagnosis_history(user_id, diagnosed_at DESC);",
        )
        .map_err(|e| MeowlyError::Storage(format!("Failed to create history table: {}", e)))?;

        Ok(Self { conn })
    }

    /// Record a diagnosis for a user. Returns the entry ID.
    ///
    /// The top candidate is the first of `results`; an empty list is rejected
    /// since there is nothing to summarize.
    pub fn record(&self, user_id: i64, results: &[Candidate]) -> Result<i64, MeowlyError> {
        let top = results.first().ok_or_else(|| {
            MeowlyError::Validation("Cannot record a diagnosis without results".to_string())
        })?;

        let results_json = serde_json::to_string(results)
            .map_err(|e| MeowlyError::Storage(format!("Failed to serialize results: {}", e)))?;
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        self.conn
            .execute(
                "INSERT INTO diagnosis_history
                 (user_id, diagnosed_at, top_disease, top_percentage, full_result_json)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![user_id, now, top.name, top.match_percentage, results_json],
            )
            .map_err(|e| MeowlyError::Storage(format!("Failed to insert history: {}", e)))?;

        let id = self.conn.last_insert_rowid();
        info!(
            "Recorded diagnosis {} for user {}: {} ({:.2}%)",
            id, user_id, top.name, top.match_percentage
        );
        Ok(id)
    }

    /// List all diagnoses for a user, newest first.
    pub fn list_for_user(&self, user_id: i64) -> Result<Vec<HistoryEntry>, MeowlyError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, user_id, diagnosed_at, top_disease, top_percentage, full_result_json
                 FROM diagnosis_history
                 WHERE user_id = ?1
                 ORDER BY diagnosed_at DESC, id DESC",
            )
            .map_err(|e| MeowlyError::Storage(format!("Failed to prepare query: {}", e)))?;

        let rows = stmt
            .query_map(params![user_id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, f64>(4)?,
                    row.get::<_, String>(5)?,
                ))
            })
            .map_err(|e| MeowlyError::Storage(format!("Failed to query history: {}", e)))?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, user_id, diagnosed_at, top_disease, top_percentage, json) = row
                .map_err(|e| MeowlyError::Storage(format!("Failed to read history row: {}", e)))?;
            entries.push(HistoryEntry {
                id,
                user_id,
                diagnosed_at,
                top_disease,
                top_percentage,
                full_result: parse_results(id, &json)?,
            });
        }
        Ok(entries)
    }
}

/// Stored results must still deserialize into candidates.
fn parse_results(id: i64, json: &str) -> Result<Vec<Candidate>, MeowlyError> {
    serde_json::from_str(json).map_err(|e| {
        MeowlyError::Storage(format!("History entry {} has malformed results: {}", id, e))
    })
}
