//! Application configuration.
//!
//! Read once at startup from `$MEOWLY_CONFIG`, or from
//! `<config dir>/meowly/config.toml` when that file exists. Missing keys fall
//! back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::MeowlyError;

pub const CONFIG_ENV: &str = "MEOWLY_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the SQLite database
    pub data_dir: PathBuf,
    /// Database file name inside `data_dir`
    pub database_file: String,
    /// Custom catalog; the embedded one is used when unset
    pub knowledge_base_path: Option<PathBuf>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .map(|d| d.join("meowly"))
                .unwrap_or_else(|| PathBuf::from(".meowly")),
            database_file: "meowly.db".to_string(),
            knowledge_base_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Config file to read: the `$MEOWLY_CONFIG` override, else the default
    /// location when a file exists there.
    pub fn locate() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        Self::default_path().filter(|path| path.exists())
    }

    /// Read `path`, or fall back to defaults when there is no file.
    pub fn load_from(path: Option<&Path>) -> Result<Self, MeowlyError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, MeowlyError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MeowlyError::Config(format!("Failed to read {:?}: {}", path, e)))?;
        Self::from_toml(&content)
            .map_err(|e| MeowlyError::Config(format!("Invalid config {:?}: {}", path, e)))
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("meowly").join("config.toml"))
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }
}
