/// One line of the routing table, unstructured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLine {
    /// The line as printed by `ip route show`
    pub raw_text: String,
}

/// Parses `ip route show` output, one row per non-blank line.
pub fn parse_routes(output: &str) -> Vec<RouteLine> {
    output
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim_start().is_empty())
        .map(|line| RouteLine {
            raw_text: line.to_string(),
        })
        .collect()
}
