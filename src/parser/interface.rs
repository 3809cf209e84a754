use std::fmt;

use super::tokens;

/// Administrative state reported by `ip -br link show`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminState {
    /// `UP`
    Up,
    /// `DOWN`
    Down,
    /// Anything else (`UNKNOWN`, `LOWERLAYERDOWN`, ...), kept verbatim
    Other(String),
}

impl From<&str> for AdminState {
    fn from(state: &str) -> Self {
        match state {
            "UP" => AdminState::Up,
            "DOWN" => AdminState::Down,
            other => AdminState::Other(other.to_string()),
        }
    }
}

impl fmt::Display for AdminState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminState::Up => f.write_str("UP"),
            AdminState::Down => f.write_str("DOWN"),
            AdminState::Other(state) => f.write_str(state),
        }
    }
}

/// One network interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRecord {
    /// Interface name, e.g. `eth0` or `veth12@if3`
    pub name: String,
    /// Administrative state
    pub admin_state: AdminState,
}

/// Parses `ip -br link show` output.
pub fn parse_interfaces(output: &str) -> Vec<InterfaceRecord> {
    output
        .lines()
        .filter_map(|line| tokens(line, 2))
        .map(|t| InterfaceRecord {
            name: t[0].to_string(),
            admin_state: AdminState::from(t[1]),
        })
        .collect()
}
