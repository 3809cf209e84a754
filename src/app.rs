use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

use crate::audit::Auditor;
use crate::command::{CommandRunner, SystemCommandRunner};
use crate::config::{load_config, AuditConfig};
use crate::dependency::check_dependencies;
use crate::error::{NetworkAuditError, Result};
use crate::logger::AuditLog;
use crate::menu::Menu;

/// Network audit CLI arguments
#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Interactive host network configuration audit",
    long_about = "This program lists network interfaces, IP addresses, routes, UFW rules, \
                  open sockets and Docker networks as tables, from an interactive menu. \
                  Every action is appended to an audit log."
)]
pub struct Args {
    /// Path to a configuration file (YAML or JSON)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Audit log file (default: audit_network.log)
    #[arg(long, short = 'l')]
    pub log_file: Option<PathBuf>,

    /// Run `ufw status numbered` without sudo
    #[arg(long)]
    pub no_sudo: bool,

    /// Print diagnostic output to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The menu ran until exit or end of input
    Completed,
    /// Required programs were missing; the menu never started
    MissingDependencies(Vec<String>),
}

/// Builds the effective configuration: file (or defaults), then flags.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded.
pub fn resolve_config(args: &Args) -> Result<AuditConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(path) = &args.log_file {
        config.log_file = path.clone();
    }
    if args.no_sudo {
        config.use_sudo = false;
    }
    Ok(config)
}

/// Runs a whole session: dependency check, then the menu loop.
///
/// If any required program is missing, the list is printed and logged and
/// the menu never starts.
///
/// # Errors
/// Returns an error if reading `input` or writing `out` fails.
pub fn run_session<R: CommandRunner>(
    runner: R,
    mut log: AuditLog,
    config: &AuditConfig,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<SessionOutcome> {
    writeln!(
        out,
        "{}",
        "Starting network configuration audit".green()
    )?;
    log.info("Starting network configuration audit");

    let report = check_dependencies(&runner, &config.required_programs);
    if !report.ok() {
        let missing = report.missing.join(", ");
        writeln!(out, "{}", format!("Missing dependencies: {missing}").red())?;
        log.error(format!("Missing dependencies: {missing}"));
        writeln!(
            out,
            "{}",
            "Cannot continue due to missing dependencies.".red()
        )?;
        return Ok(SessionOutcome::MissingDependencies(report.missing));
    }
    info!("All {} required program(s) found.", config.required_programs.len());

    let mut menu = Menu::new(Auditor::new(runner, log, config.use_sudo));
    menu.run(input, out)?;

    let mut auditor = menu.into_auditor();
    auditor
        .log_mut()
        .info("Network configuration audit completed");
    Ok(SessionOutcome::Completed)
}

/// Runs the network audit on this host based on the provided CLI arguments.
///
/// Steps performed:
/// 1. Load the configuration file, if any, and apply command line overrides.
/// 2. Open the audit log in append mode.
/// 3. Check that the required programs are on `PATH`.
/// 4. Run the interactive menu on stdin/stdout.
///
/// # Errors
/// Returns `NetworkAuditError` variants if:
/// * The configuration cannot be loaded.
/// * The audit log cannot be opened.
/// * Reading stdin or writing stdout fails.
pub fn run_network_audit(args: Args) -> Result<SessionOutcome> {
    let config = resolve_config(&args)?;

    let log = AuditLog::open(&config.log_file)
        .map_err(|e| NetworkAuditError::log_file(config.log_file.display().to_string(), e))?;
    info!("Audit log: {}", config.log_file.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        SystemCommandRunner,
        log,
        &config,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}
