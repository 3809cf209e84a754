//! Parsers for the text printed by the inspection commands.
//!
//! Every parser is best effort: fields are whitespace or key delimited
//! extractions, nothing is validated, and lines with fewer tokens than a
//! parser needs are dropped silently. Rows keep the order of the source text.

mod address;
mod docker;
mod firewall;
mod interface;
mod route;
mod socket;

pub use address::{parse_addresses, AddressRecord};
pub use docker::{
    flatten_networks, parse_network_names, DockerHost, DockerNetwork, DockerNetworkRow,
};
pub use firewall::{parse_firewall_rules, FirewallRuleLine, RuleAction};
pub use interface::{parse_interfaces, AdminState, InterfaceRecord};
pub use route::{parse_routes, RouteLine};
pub use socket::{parse_sockets, SocketRecord};

/// Splits `line` on whitespace, returning `None` when fewer than `min` tokens remain.
fn tokens(line: &str, min: usize) -> Option<Vec<&str>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    (tokens.len() >= min).then_some(tokens)
}
