pub mod store;
pub mod types;

pub use store::DiagnosisHistory;
pub use types::{HistoryEntry, HistoryView};
