use crate::parser::{
    AddressRecord, AdminState, DockerNetworkRow, FirewallRuleLine, InterfaceRecord, RouteLine,
    RuleAction, SocketRecord,
};
use crate::render::{Cell, TableRow, Tone};

impl TableRow for InterfaceRecord {
    const HEADERS: &'static [&'static str] = &["Interface", "State"];

    fn cells(&self) -> Vec<Cell> {
        let tone = match self.admin_state {
            AdminState::Up => Tone::Good,
            AdminState::Down | AdminState::Other(_) => Tone::Bad,
        };
        vec![
            Cell::new(&self.name, Tone::Plain),
            Cell::new(self.admin_state.to_string(), tone),
        ]
    }
}

impl TableRow for AddressRecord {
    const HEADERS: &'static [&'static str] = &["Interface", "IP Address"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::new(&self.interface_name, Tone::Plain),
            Cell::new(&self.address, Tone::Highlight),
        ]
    }
}

impl TableRow for RouteLine {
    const HEADERS: &'static [&'static str] = &["Route"];

    fn cells(&self) -> Vec<Cell> {
        vec![Cell::new(&self.raw_text, Tone::Good)]
    }
}

impl TableRow for FirewallRuleLine {
    const HEADERS: &'static [&'static str] = &["UFW Rule"];

    fn cells(&self) -> Vec<Cell> {
        let tone = match self.action {
            RuleAction::Allow => Tone::Good,
            RuleAction::Deny | RuleAction::Reject => Tone::Bad,
            RuleAction::Limit | RuleAction::Unknown => Tone::Warning,
        };
        vec![Cell::new(&self.raw_text, tone)]
    }
}

impl TableRow for SocketRecord {
    const HEADERS: &'static [&'static str] = &["State", "Local Address", "Remote Address"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::new(&self.state, Tone::Good),
            Cell::new(&self.local_address, Tone::Highlight),
            Cell::new(&self.remote_address, Tone::Highlight),
        ]
    }
}

impl TableRow for DockerNetworkRow {
    const HEADERS: &'static [&'static str] = &["Network", "Host", "Host IP"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::new(&self.network_name, Tone::Good),
            Cell::new(&self.host_name, Tone::Highlight),
            Cell::new(&self.host_ip, Tone::Highlight),
        ]
    }
}
