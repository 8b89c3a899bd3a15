//! Meowly command-line interface.
//!
//! Usage:
//!   meowly symptoms
//!   meowly diseases
//!   meowly diagnose <codes>... [--user <id>]
//!   meowly register <email> <password>
//!   meowly login <email> <password>
//!   meowly history <user>

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::{self, diagnose::DiagnoseRequest, AppState};
use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "meowly")]
#[command(version)]
#[command(about = "Rule-based symptom checker for cats", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to $MEOWLY_CONFIG or the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every known symptom code
    Symptoms,

    /// List every disease with its symptoms and care advice
    Diseases,

    /// Rank diseases matching the given symptom codes
    Diagnose {
        /// Symptom codes, e.g. G1 G4
        symptoms: Vec<String>,

        /// Record the result in this user's history
        #[arg(short, long)]
        user: Option<i64>,
    },

    /// Create an account
    Register { email: String, password: String },

    /// Check credentials
    Login { email: String, password: String },

    /// Show a user's past diagnoses, newest first
    History { user: i64 },
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let source = cli.config.clone().or_else(AppConfig::locate);
    let config = AppConfig::load_from(source.as_deref())?;
    crate::init_tracing(&config.log_filter);
    match &source {
        Some(path) => info!("Loaded config from {:?}", path),
        None => debug!("No config file found, using defaults"),
    }

    let state = AppState::open(&config)?;

    match cli.command {
        Commands::Symptoms => print_json(&commands::catalog::list_symptoms(&state)),
        Commands::Diseases => print_json(&commands::catalog::list_diseases(&state)),
        Commands::Diagnose {
            symptoms,
            user: Some(user_id),
        } => {
            let request = DiagnoseRequest { user_id, symptoms };
            print_json(&commands::diagnose::diagnose(&state, &request)?)
        }
        Commands::Diagnose {
            symptoms,
            user: None,
        } => print_json(&state.engine.diagnose(&symptoms)),
        Commands::Register { email, password } => {
            print_json(&commands::accounts::register(&state, &email, &password)?)
        }
        Commands::Login { email, password } => {
            print_json(&commands::accounts::login(&state, &email, &password)?)
        }
        Commands::History { user } => print_json(&commands::history::history(&state, user)?),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
