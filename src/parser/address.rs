use super::tokens;

/// First address assigned to an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    /// Interface name
    pub interface_name: String,
    /// Address in CIDR notation, as printed
    pub address: String,
}

/// Parses `ip -br addr show` output.
///
/// Interfaces without any address print only two columns and are dropped.
pub fn parse_addresses(output: &str) -> Vec<AddressRecord> {
    output
        .lines()
        .filter_map(|line| tokens(line, 3))
        .map(|t| AddressRecord {
            interface_name: t[0].to_string(),
            address: t[2].to_string(),
        })
        .collect()
}
