//! Append-only audit log.
//!
//! The log is an explicit handle opened once at startup and passed to whoever
//! records events. Each line reads `<timestamp> - <LEVEL> - <message>`.

use chrono::{DateTime, Local, TimeZone};
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Severity of an audit log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum LogLevel {
    /// A completed action
    Info,
    /// A failure: missing dependency, missing executable, failed command
    Error,
}

/// Handle to the audit log file.
pub struct AuditLog {
    sink: Box<dyn Write>,
}

impl fmt::Debug for AuditLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditLog").finish_non_exhaustive()
    }
}

impl AuditLog {
    /// Opens `path` for appending, creating it if needed.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self::from_writer(file))
    }

    /// Wraps an arbitrary writer.
    pub fn from_writer(writer: impl Write + 'static) -> Self {
        Self {
            sink: Box::new(writer),
        }
    }

    /// Records an `INFO` line.
    pub fn info(&mut self, message: impl AsRef<str>) {
        self.record(LogLevel::Info, message.as_ref());
    }

    /// Records an `ERROR` line.
    pub fn error(&mut self, message: impl AsRef<str>) {
        self.record(LogLevel::Error, message.as_ref());
    }

    fn record(&mut self, level: LogLevel, message: &str) {
        debug!(%level, "{}", message);
        let line = format_line(&Local::now(), level, message);
        let written = writeln!(self.sink, "{line}").and_then(|()| self.sink.flush());
        if let Err(e) = written {
            warn!("Failed to write audit log: {}", e);
        }
    }
}

/// Formats a single log line (without the trailing newline).
pub fn format_line<Tz>(timestamp: &DateTime<Tz>, level: LogLevel, message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!(
        "{} - {} - {}",
        timestamp.format(TIMESTAMP_FORMAT),
        level,
        message
    )
}
