//! Network Audit CLI
//!
//! Interactive audit of the host network configuration: interfaces, addresses,
//! routes, UFW rules, open sockets and Docker networks.
//!
//! # Example
//! ```sh
//! netaudit --config netaudit.yaml
//! ```

use clap::Parser;
use netaudit::{run_network_audit, Args, SessionOutcome};
use std::process::ExitCode;
use tracing::{error, Level};

/// Entry point for the netaudit CLI.
fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match run_network_audit(args) {
        Ok(SessionOutcome::Completed) => ExitCode::SUCCESS,
        Ok(SessionOutcome::MissingDependencies(_)) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
