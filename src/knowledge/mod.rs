//! Static feline symptom catalog and disease rules.
//!
//! The knowledge base is a closed world: a fixed list of symptom codes and a
//! fixed list of disease rules, each naming the symptoms it requires and the
//! care recommendations to give.
//!
//! # Architecture
//!
//! - **Source**: TOML document embedded at compile time (or a custom file read once at startup)
//! - **Validation**: Integrity is checked when the catalog is built, never per request
//! - **Access**: Read-only; nothing hands out a mutable handle after construction
//!
//! # Example
//!
//! ```ignore
//! use meowly::knowledge::default_knowledge_base;
//!
//! let kb = default_knowledge_base();
//!
//! for symptom in kb.list_symptoms() {
//!     println!("{}: {}", symptom.code, symptom.text);
//! }
//!
//! let ringworm = kb.get_rule("P1").unwrap();
//! assert_eq!(ringworm.total_symptoms(), 4);
//! ```

mod catalog;
mod loader;
mod types;

pub use catalog::KnowledgeBase;
pub use loader::{default_knowledge_base, knowledge_base_from_str, load_knowledge_base};
pub use types::*;
