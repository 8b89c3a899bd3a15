pub mod accounts;
mod cli;
pub mod commands;
pub mod config;
pub mod diagnosis;
mod error;
pub mod history;
pub mod knowledge;

pub use commands::AppState;
pub use config::AppConfig;
pub use diagnosis::{Candidate, DiagnosisEngine, DiagnosisOutcome};
pub use error::{KnowledgeBaseError, MeowlyError};
pub use knowledge::KnowledgeBase;

/// Install the global tracing subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    cli::run()
}
