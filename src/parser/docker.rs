use super::tokens;

const NAME_KEY: &str = "\"Name\":";
const IPV4_KEY: &str = "\"IPv4Address\":";

/// A `"Name":` entry seen in `docker network inspect`, with the address that followed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockerHost {
    /// Value of the `"Name":` key
    pub name: String,
    /// Value of the next `"IPv4Address":` key, empty if none followed
    pub ipv4_address: String,
}

/// Accumulator for one Docker network and the hosts found in its inspect output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerNetwork {
    /// Network name from `docker network ls`
    pub name: String,
    /// Hosts in the order their `"Name":` keys appeared
    pub hosts: Vec<DockerHost>,
}

/// Flattened display row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerNetworkRow {
    /// Network name
    pub network_name: String,
    /// Host name, empty for a network without hosts
    pub host_name: String,
    /// Host IPv4 address, empty when unknown
    pub host_ip: String,
}

/// Extracts the network names (second column) from `docker network ls`,
/// skipping the header line.
pub fn parse_network_names(output: &str) -> Vec<String> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| tokens(line, 2))
        .map(|t| t[1].to_string())
        .collect()
}

/// Text after the first `:` of `line`, stripped of quotes, commas and whitespace.
fn key_value(line: &str) -> String {
    line.split_once(':')
        .map(|(_, value)| value.trim_matches(|c: char| c == '"' || c == ',' || c.is_whitespace()))
        .unwrap_or_default()
        .to_string()
}

impl DockerNetwork {
    /// Creates an accumulator with no hosts.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hosts: Vec::new(),
        }
    }

    /// Scans `docker network inspect` text for `"Name":` and `"IPv4Address":` keys.
    ///
    /// Each `"Name":` opens a host entry; each `"IPv4Address":` fills the
    /// address of the latest one (opening an unnamed entry if there is none).
    pub fn absorb_inspect(&mut self, output: &str) {
        for line in output.lines() {
            if line.contains(NAME_KEY) {
                self.hosts.push(DockerHost {
                    name: key_value(line),
                    ipv4_address: String::new(),
                });
            }
            if line.contains(IPV4_KEY) {
                if self.hosts.is_empty() {
                    self.hosts.push(DockerHost::default());
                }
                if let Some(host) = self.hosts.last_mut() {
                    host.ipv4_address = key_value(line);
                }
            }
        }
    }

    /// One row per host, or a single row with empty host fields when there are none.
    pub fn rows(&self) -> Vec<DockerNetworkRow> {
        if self.hosts.is_empty() {
            return vec![DockerNetworkRow {
                network_name: self.name.clone(),
                host_name: String::new(),
                host_ip: String::new(),
            }];
        }
        self.hosts
            .iter()
            .map(|host| DockerNetworkRow {
                network_name: self.name.clone(),
                host_name: host.name.clone(),
                host_ip: host.ipv4_address.clone(),
            })
            .collect()
    }
}

/// Flattens every network into display rows, preserving order.
pub fn flatten_networks(networks: &[DockerNetwork]) -> Vec<DockerNetworkRow> {
    networks.iter().flat_map(DockerNetwork::rows).collect()
}
