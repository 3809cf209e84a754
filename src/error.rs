use thiserror::Error;

use crate::config::ConfigError;

/// Error type for `netaudit` operations.
#[derive(Error, Debug)]
pub enum NetworkAuditError {
    /// I/O error on the terminal streams
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The audit log could not be opened
    #[error("Cannot open audit log {path}: {source}")]
    LogFile {
        /// Log file path
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, NetworkAuditError>;

impl NetworkAuditError {
    pub(crate) fn log_file(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::LogFile {
            path: path.into(),
            source,
        }
    }
}
