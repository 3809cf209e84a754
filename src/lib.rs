#![crate_type = "lib"]
#![forbid(unsafe_code)]
#![forbid(missing_debug_implementations)]
#![forbid(missing_docs)]
#![doc = include_str!("../README.md")]

//! # netaudit
//!
//! An interactive audit of a host's network configuration.
//!
//! - Runs `ip`, `ss`, `ufw` and `docker` without a shell and parses their output
//! - Renders each result as a bordered table
//! - Appends every action and failure to an audit log
//!
//! ## Example (CLI)
//! ```sh
//! netaudit --log-file /var/log/netaudit.log --no-sudo
//! ```

mod app;
mod audit;
mod command;
mod config;
mod dependency;
mod error;
mod logger;
mod menu;
mod parser;
mod render;
#[cfg(test)]
mod testing;

pub use app::{resolve_config, run_network_audit, run_session, Args, SessionOutcome};
pub use audit::{AuditSection, Auditor};
pub use command::{command_line, CommandError, CommandRunner, SystemCommandRunner};
pub use config::{load_config, AuditConfig, ConfigError, DEFAULT_LOG_FILE};
pub use dependency::{check_dependencies, DependencyReport, DEFAULT_REQUIRED_PROGRAMS};
pub use error::{NetworkAuditError, Result};
pub use logger::{format_line, AuditLog, LogLevel};
pub use menu::{Menu, MenuChoice, MenuState};
pub use parser::{
    flatten_networks, parse_addresses, parse_firewall_rules, parse_interfaces,
    parse_network_names, parse_routes, parse_sockets, AddressRecord, AdminState, DockerHost,
    DockerNetwork, DockerNetworkRow, FirewallRuleLine, InterfaceRecord, RouteLine, RuleAction,
    SocketRecord,
};
pub use render::{render_grid, render_table, section_title, Cell, TableRow, Tone};
