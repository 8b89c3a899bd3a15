//! Request-level commands over the diagnosis engine and the stores.
//!
//! Each command validates its input, calls into the engine or a store, and
//! returns a serializable value or a `MeowlyError`.

pub mod accounts;
pub mod catalog;
pub mod diagnose;
pub mod history;

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{info, warn};

use crate::accounts::AccountStore;
use crate::config::AppConfig;
use crate::diagnosis::DiagnosisEngine;
use crate::error::MeowlyError;
use crate::history::DiagnosisHistory;
use crate::knowledge::{default_knowledge_base, load_knowledge_base, KnowledgeBase};

/// Shared state handed to every command.
///
/// The engine is immutable and lock-free; each store owns a blocking SQLite
/// connection behind a mutex, which serializes writes.
pub struct AppState {
    pub engine: DiagnosisEngine,
    accounts: Mutex<AccountStore>,
    history: Mutex<DiagnosisHistory>,
}

impl AppState {
    pub fn new(kb: Arc<KnowledgeBase>, accounts: AccountStore, history: DiagnosisHistory) -> Self {
        Self {
            engine: DiagnosisEngine::new(kb),
            accounts: Mutex::new(accounts),
            history: Mutex::new(history),
        }
    }

    /// Build state from configuration: load the catalog, open the database.
    pub fn open(config: &AppConfig) -> anyhow::Result<Self> {
        let kb = match &config.knowledge_base_path {
            Some(path) => load_knowledge_base(path)?,
            None => default_knowledge_base(),
        };

        let db_path = config.database_path();
        let accounts = AccountStore::new(&db_path)?;
        let history = DiagnosisHistory::new(&db_path)?;

        info!(
            "Meowly ready: {} symptoms, {} diseases, database {:?}",
            kb.symptom_count(),
            kb.disease_count(),
            db_path
        );
        Ok(Self::new(Arc::new(kb), accounts, history))
    }

    /// State over the embedded catalog with throwaway in-memory stores.
    pub fn in_memory() -> Result<Self, MeowlyError> {
        Ok(Self::new(
            Arc::new(default_knowledge_base()),
            AccountStore::in_memory()?,
            DiagnosisHistory::in_memory()?,
        ))
    }

    // Poisoned locks are recovered; the guarded connection keeps no state a
    // panicking holder could leave half-updated.
    pub(crate) fn accounts(&self) -> MutexGuard<'_, AccountStore> {
        self.accounts.lock().unwrap_or_else(|poisoned| {
            warn!("Account store lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    pub(crate) fn history(&self) -> MutexGuard<'_, DiagnosisHistory> {
        self.history.lock().unwrap_or_else(|poisoned| {
            warn!("History store lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Fail with `NotFound` unless the user exists.
    pub(crate) fn require_user(&self, user_id: i64) -> Result<(), MeowlyError> {
        match self.accounts().get(user_id)? {
            Some(_) => Ok(()),
            None => Err(MeowlyError::NotFound(format!("User {}", user_id))),
        }
    }
}
