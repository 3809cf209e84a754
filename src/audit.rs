//! Audit actions: run the inspection command, parse its output, print a table.

use colored::Colorize;
use std::io::{self, Write};

use crate::command::{CommandError, CommandRunner};
use crate::logger::AuditLog;
use crate::parser::{
    flatten_networks, parse_addresses, parse_firewall_rules, parse_interfaces,
    parse_network_names, parse_routes, parse_sockets, DockerNetwork,
};
use crate::render::{render_table, section_title, TableRow};

/// One kind of audit, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumIter, strum_macros::Display)]
pub enum AuditSection {
    /// `ip -br link show`
    #[strum(to_string = "Network interfaces and their state")]
    Interfaces,
    /// `ip -br addr show`
    #[strum(to_string = "IP addresses assigned to each interface")]
    Addresses,
    /// `ip route show`
    #[strum(to_string = "Current routing table")]
    Routes,
    /// `ufw status numbered`
    #[strum(to_string = "Firewall rules (UFW)")]
    Firewall,
    /// `ss -tuln`
    #[strum(to_string = "Open network connections")]
    Sockets,
    /// `docker network ls` and `docker network inspect`
    #[strum(to_string = "Docker networks")]
    DockerNetworks,
}

impl AuditSection {
    /// Message logged when the section completed.
    pub fn completed_message(self) -> &'static str {
        match self {
            AuditSection::Interfaces => "Listed network interfaces",
            AuditSection::Addresses => "Showed IP addresses",
            AuditSection::Routes => "Showed routing table",
            AuditSection::Firewall => "Showed firewall rules",
            AuditSection::Sockets => "Listed open connections",
            AuditSection::DockerNetworks => "Listed Docker networks",
        }
    }
}

/// Runs audit sections against a [`CommandRunner`], reporting to an [`AuditLog`].
#[derive(Debug)]
pub struct Auditor<R> {
    runner: R,
    log: AuditLog,
    use_sudo: bool,
}

impl<R: CommandRunner> Auditor<R> {
    /// Creates an auditor. `use_sudo` prefixes the UFW query with `sudo`.
    pub fn new(runner: R, log: AuditLog, use_sudo: bool) -> Self {
        Self {
            runner,
            log,
            use_sudo,
        }
    }

    /// The command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// The audit log.
    pub fn log_mut(&mut self) -> &mut AuditLog {
        &mut self.log
    }

    /// Runs one section, writing its title and table (or failure) to `out`.
    ///
    /// Command failures are reported to `out` and the log, never returned.
    ///
    /// # Errors
    /// Returns an error only if writing to `out` fails.
    pub fn run_section(&mut self, section: AuditSection, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "\n{}", section_title(&section.to_string()))?;
        let completed = match section {
            AuditSection::Interfaces => self.interfaces(out)?,
            AuditSection::Addresses => self.addresses(out)?,
            AuditSection::Routes => self.routes(out)?,
            AuditSection::Firewall => self.firewall(out)?,
            AuditSection::Sockets => self.sockets(out)?,
            AuditSection::DockerNetworks => self.docker_networks(out)?,
        };
        if completed {
            self.log.info(section.completed_message());
        }
        Ok(())
    }

    fn interfaces(&mut self, out: &mut dyn Write) -> io::Result<bool> {
        let Some(output) = self.capture(out, "ip", &["-br", "link", "show"])? else {
            return Ok(false);
        };
        print_table(out, &parse_interfaces(&output))
    }

    fn addresses(&mut self, out: &mut dyn Write) -> io::Result<bool> {
        let Some(output) = self.capture(out, "ip", &["-br", "addr", "show"])? else {
            return Ok(false);
        };
        print_table(out, &parse_addresses(&output))
    }

    fn routes(&mut self, out: &mut dyn Write) -> io::Result<bool> {
        let Some(output) = self.capture(out, "ip", &["route", "show"])? else {
            return Ok(false);
        };
        print_table(out, &parse_routes(&output))
    }

    fn firewall(&mut self, out: &mut dyn Write) -> io::Result<bool> {
        if !self.require(out, "ufw")? {
            return Ok(false);
        }
        let output = if self.use_sudo {
            self.capture(out, "sudo", &["ufw", "status", "numbered"])?
        } else {
            self.capture(out, "ufw", &["status", "numbered"])?
        };
        let Some(output) = output else {
            return Ok(false);
        };
        print_table(out, &parse_firewall_rules(&output))
    }

    fn sockets(&mut self, out: &mut dyn Write) -> io::Result<bool> {
        let Some(output) = self.capture(out, "ss", &["-tuln"])? else {
            return Ok(false);
        };
        print_table(out, &parse_sockets(&output))
    }

    fn docker_networks(&mut self, out: &mut dyn Write) -> io::Result<bool> {
        if !self.require(out, "docker")? {
            return Ok(false);
        }
        let Some(listing) = self.capture(out, "docker", &["network", "ls"])? else {
            return Ok(false);
        };

        let mut networks = Vec::new();
        for name in parse_network_names(&listing) {
            let mut network = DockerNetwork::new(name);
            // A failed inspect leaves the network without hosts.
            if let Some(inspect) =
                self.capture(out, "docker", &["network", "inspect", network.name.as_str()])?
            {
                network.absorb_inspect(&inspect);
            }
            networks.push(network);
        }
        print_table(out, &flatten_networks(&networks))
    }

    /// Runs a command; on failure reports it and returns `None`.
    fn capture(
        &mut self,
        out: &mut dyn Write,
        program: &str,
        args: &[&str],
    ) -> io::Result<Option<String>> {
        match self.runner.run(program, args) {
            Ok(output) => Ok(Some(output)),
            Err(e) => {
                self.report(out, &e)?;
                Ok(None)
            }
        }
    }

    /// Inline check for tools that only some sections need.
    fn require(&mut self, out: &mut dyn Write, program: &str) -> io::Result<bool> {
        if self.runner.is_installed(program) {
            return Ok(true);
        }
        self.report(
            out,
            &CommandError::NotInstalled {
                program: program.to_string(),
            },
        )?;
        Ok(false)
    }

    fn report(&mut self, out: &mut dyn Write, error: &CommandError) -> io::Result<()> {
        let message = error.to_string();
        self.log.error(&message);
        writeln!(out, "{}", message.red())
    }
}

fn print_table<T: TableRow>(out: &mut dyn Write, rows: &[T]) -> io::Result<bool> {
    writeln!(out, "{}", render_table(rows))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeRunner, SharedBuffer};

    fn auditor(runner: FakeRunner, use_sudo: bool) -> (Auditor<FakeRunner>, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let log = AuditLog::from_writer(buffer.clone());
        (Auditor::new(runner, log, use_sudo), buffer)
    }

    fn run(auditor: &mut Auditor<FakeRunner>, section: AuditSection) -> String {
        let mut out = Vec::new();
        auditor.run_section(section, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_interfaces_table_and_log() {
        let runner = FakeRunner::default().with_output("ip -br link show", "eth0 UP\nlo DOWN\n");
        let (mut auditor, log) = auditor(runner, true);
        let out = run(&mut auditor, AuditSection::Interfaces);

        assert!(out.contains("Network interfaces and their state"));
        assert!(out.contains("Interface"));
        assert!(out.contains("eth0"));
        assert!(out.contains("DOWN"));
        assert_eq!(auditor.runner().calls(), vec!["ip -br link show"]);
        assert!(log.contents().contains(" - INFO - Listed network interfaces"));
    }

    #[test]
    fn test_firewall_uses_sudo_when_enabled() {
        let (mut auditor, _) = auditor(FakeRunner::default(), true);
        run(&mut auditor, AuditSection::Firewall);
        assert_eq!(auditor.runner().calls(), vec!["sudo ufw status numbered"]);
    }

    #[test]
    fn test_firewall_without_sudo() {
        let runner = FakeRunner::default().with_output(
            "ufw status numbered",
            "Status: active\n\n[ 1] 22/tcp   ALLOW IN   Anywhere\n",
        );
        let (mut auditor, _) = auditor(runner, false);
        let out = run(&mut auditor, AuditSection::Firewall);
        assert_eq!(auditor.runner().calls(), vec!["ufw status numbered"]);
        assert!(out.contains("[ 1] 22/tcp"));
        assert!(!out.contains("Status: active"));
    }

    #[test]
    fn test_firewall_ufw_missing() {
        let (mut auditor, log) = auditor(FakeRunner::default().without("ufw"), true);
        let out = run(&mut auditor, AuditSection::Firewall);
        assert!(out.contains("ufw is not installed"));
        assert!(!out.contains("UFW Rule"));
        assert!(auditor.runner().calls().is_empty());
        assert!(log.contents().contains(" - ERROR - ufw is not installed"));
        assert!(!log.contents().contains("INFO"));
    }

    #[test]
    fn test_command_failure_is_not_rendered_as_rows() {
        let runner = FakeRunner::default()
            .with_failure("sudo ufw status numbered", "[sudo] a password is required");
        let (mut auditor, log) = auditor(runner, true);
        let out = run(&mut auditor, AuditSection::Firewall);

        assert!(out.contains(
            "Error running sudo ufw status numbered: [sudo] a password is required"
        ));
        assert!(!out.contains("UFW Rule"));
        let contents = log.contents();
        assert!(contents.contains(
            " - ERROR - Error running sudo ufw status numbered: [sudo] a password is required"
        ));
        assert!(!contents.contains("Showed firewall rules"));
    }

    #[test]
    fn test_sockets() {
        let runner = FakeRunner::default().with_output(
            "ss -tuln",
            "Netid State Recv-Q Send-Q Local:Addr Peer:Addr\ntcp LISTEN 0 128 0.0.0.0:22 0.0.0.0:*\n",
        );
        let (mut auditor, _) = auditor(runner, true);
        let out = run(&mut auditor, AuditSection::Sockets);
        assert!(out.contains("0.0.0.0:22"));
        assert!(!out.contains("Peer:Addr"));
    }

    #[test]
    fn test_docker_networks_inspects_each_network() {
        let runner = FakeRunner::default()
            .with_output(
                "docker network ls",
                "NETWORK ID     NAME         DRIVER    SCOPE\n1f2e3d4c5b6a   bridge-net   bridge    local\n",
            )
            .with_output(
                "docker network inspect bridge-net",
                "\"Name\": \"bridge\",\n\"IPv4Address\": \"172.17.0.1/16\",\n",
            );
        let (mut auditor, log) = auditor(runner, true);
        let out = run(&mut auditor, AuditSection::DockerNetworks);

        assert_eq!(
            auditor.runner().calls(),
            vec!["docker network ls", "docker network inspect bridge-net"]
        );
        assert!(out.contains("bridge-net"));
        assert!(out.contains("172.17.0.1/16"));
        assert!(log.contents().contains("INFO - Listed Docker networks"));
    }

    #[test]
    fn test_docker_failed_inspect_keeps_other_networks() {
        let runner = FakeRunner::default()
            .with_output("docker network ls", "ID NAME\n1 alpha\n2 beta\n")
            .with_failure("docker network inspect alpha", "permission denied")
            .with_output("docker network inspect beta", "\"Name\": \"web\"\n");
        let (mut auditor, log) = auditor(runner, true);
        let out = run(&mut auditor, AuditSection::DockerNetworks);

        assert!(out.contains("Error running docker network inspect alpha: permission denied"));
        assert!(out.contains("alpha"));
        assert!(out.contains("web"));
        assert!(log.contents().contains("ERROR - Error running docker network inspect alpha"));
    }

    #[test]
    fn test_docker_missing() {
        let (mut auditor, _) = auditor(FakeRunner::default().without("docker"), true);
        let out = run(&mut auditor, AuditSection::DockerNetworks);
        assert!(out.contains("docker is not installed"));
        assert!(auditor.runner().calls().is_empty());
    }

    #[test]
    fn test_missing_executable_reported_by_runner() {
        // `ip` resolvable at startup but gone when the section runs.
        let runner = FakeRunner::default().without("ip");
        let (mut auditor, log) = auditor(runner, true);
        let out = run(&mut auditor, AuditSection::Routes);
        assert!(out.contains("ip is not installed"));
        assert!(log.contents().contains("ERROR - ip is not installed"));
    }
}
