use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::config::load::load_config_from_path;
use crate::dependency::DEFAULT_REQUIRED_PROGRAMS;

mod load;

/// Log file used when neither the configuration nor the command line names one.
pub const DEFAULT_LOG_FILE: &str = "audit_network.log";

/// Error type for `config` operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
    /// Unsupported file format
    #[error("Unsupported file format: {path}")]
    UnsupportedFileFormat {
        /// File path
        path: String,
    },
}

/// Runtime settings of an audit session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Append-only audit log location
    pub log_file: PathBuf,
    /// Query UFW through `sudo`
    pub use_sudo: bool,
    /// Programs that must be on `PATH` before the menu starts
    pub required_programs: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            use_sudo: true,
            required_programs: DEFAULT_REQUIRED_PROGRAMS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

/// Loads the configuration file at `path`, or the defaults when `path` is `None`.
///
/// # Errors
/// Returns an error if the file cannot be read, is not YAML/JSON, or fails to parse.
pub fn load_config(path: Option<&Path>) -> Result<AuditConfig, ConfigError> {
    match path {
        Some(path) => load_config_from_path(path),
        None => Ok(AuditConfig::default()),
    }
}
