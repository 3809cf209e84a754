//! Execution of the external inspection programs.
//!
//! Programs are always spawned directly with an argument vector, never through a
//! shell. A non-zero exit status is reported as [`CommandError::Failed`] so that
//! error text is never mistaken for real output.

use std::io;
use std::process::Command;
use tracing::debug;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The executable could not be found
    #[error("{program} is not installed")]
    NotInstalled {
        /// Program name
        program: String,
    },
    /// The program exited with a non-zero status
    #[error("Error running {command}: {stderr}")]
    Failed {
        /// Full command line
        command: String,
        /// Exit code, if the program was not killed by a signal
        code: Option<i32>,
        /// Captured standard error, trimmed
        stderr: String,
    },
    /// The program could not be spawned
    #[error("Failed to run {command}: {source}")]
    Io {
        /// Full command line
        command: String,
        /// Underlying I/O error
        source: io::Error,
    },
}

/// Runs external programs and resolves them on the search path.
pub trait CommandRunner {
    /// Runs `program` with `args` and returns its standard output.
    ///
    /// # Errors
    /// Returns a [`CommandError`] if the program is missing, cannot be spawned or
    /// exits with a non-zero status.
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError>;

    /// Returns `true` if `program` is resolvable on the execution search path.
    fn is_installed(&self, program: &str) -> bool;
}

/// [`CommandRunner`] backed by `std::process::Command` and `PATH` lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let command = command_line(program, args);
        debug!("Running {}", command);

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => CommandError::NotInstalled {
                    program: program.to_string(),
                },
                _ => CommandError::Io {
                    command: command.clone(),
                    source: e,
                },
            })?;

        if !output.status.success() {
            return Err(CommandError::Failed {
                command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn is_installed(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

/// Joins a program and its arguments with single spaces, for display and logs.
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
