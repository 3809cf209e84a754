use super::tokens;

/// One socket line of `ss -tuln`.
///
/// `state` is the first column, which `ss -tuln` labels `Netid` (`tcp`/`udp`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketRecord {
    /// First column
    pub state: String,
    /// Fifth column, local `address:port`
    pub local_address: String,
    /// Sixth column, peer `address:port`; empty when the line has only five columns
    pub remote_address: String,
}

/// Parses `ss -tuln` output, skipping the header line.
pub fn parse_sockets(output: &str) -> Vec<SocketRecord> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| tokens(line, 5))
        .map(|t| SocketRecord {
            state: t[0].to_string(),
            local_address: t[4].to_string(),
            remote_address: t.get(5).map(|s| s.to_string()).unwrap_or_default(),
        })
        .collect()
}
