//! Symptom-to-disease matching engine.
//!
//! Scores each disease rule by how much of its required symptom set was
//! submitted and returns the overlapping diseases ranked by that percentage.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use meowly::diagnosis::DiagnosisEngine;
//! use meowly::knowledge::default_knowledge_base;
//!
//! let engine = DiagnosisEngine::new(Arc::new(default_knowledge_base()));
//! let outcome = engine.diagnose(["G1", "G4", "G6", "G11"]);
//!
//! for candidate in &outcome.results {
//!     println!("{}: {:.2}% ({}/{})",
//!         candidate.name,
//!         candidate.match_percentage,
//!         candidate.matched_symptoms_count,
//!         candidate.total_symptoms);
//! }
//! ```

mod engine;
mod types;

pub use engine::DiagnosisEngine;
pub use types::*;
