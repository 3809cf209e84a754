//! Interactive numbered menu.

use colored::Colorize;
use std::io::{self, BufRead, Write};
use strum::{EnumMessage, IntoEnumIterator};

use crate::audit::{AuditSection, Auditor};
use crate::command::CommandRunner;

const FAREWELL: &str = "Exiting. Thank you for using the network configuration audit tool.";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const PROMPT: &str = "Enter your choice: ";

/// Menu entries, numbered from 1 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumIter, strum_macros::EnumMessage)]
pub enum MenuChoice {
    /// 1
    #[strum(message = "List network interfaces")]
    Interfaces,
    /// 2
    #[strum(message = "Show IP addresses")]
    Addresses,
    /// 3
    #[strum(message = "Show routing table")]
    Routes,
    /// 4
    #[strum(message = "Show firewall rules")]
    Firewall,
    /// 5
    #[strum(message = "List open connections")]
    Sockets,
    /// 6
    #[strum(message = "List Docker networks")]
    DockerNetworks,
    /// 7
    #[strum(message = "Run all audits")]
    All,
    /// 8
    #[strum(message = "Exit")]
    Exit,
}

impl MenuChoice {
    /// Number the user types to select this entry.
    pub fn number(self) -> usize {
        self as usize + 1
    }

    /// Maps a line of user input to a choice. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::iter().find(|choice| choice.number().to_string() == input)
    }

    /// Audit sections run for this choice, in order.
    pub fn sections(self) -> Vec<AuditSection> {
        match self {
            MenuChoice::Interfaces => vec![AuditSection::Interfaces],
            MenuChoice::Addresses => vec![AuditSection::Addresses],
            MenuChoice::Routes => vec![AuditSection::Routes],
            MenuChoice::Firewall => vec![AuditSection::Firewall],
            MenuChoice::Sockets => vec![AuditSection::Sockets],
            MenuChoice::DockerNetworks => vec![AuditSection::DockerNetworks],
            MenuChoice::All => AuditSection::iter().collect(),
            MenuChoice::Exit => Vec::new(),
        }
    }
}

/// Menu loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Waiting for the next selection
    Running,
    /// Exit selected or input closed
    Terminated,
}

/// The interactive menu controller.
#[derive(Debug)]
pub struct Menu<R> {
    auditor: Auditor<R>,
    state: MenuState,
}

impl<R: CommandRunner> Menu<R> {
    /// Creates a running menu dispatching to `auditor`.
    pub fn new(auditor: Auditor<R>) -> Self {
        Self {
            auditor,
            state: MenuState::Running,
        }
    }

    /// Current state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// The auditor the menu dispatches to.
    pub fn auditor(&self) -> &Auditor<R> {
        &self.auditor
    }

    /// Consumes the menu, returning its auditor.
    pub fn into_auditor(self) -> Auditor<R> {
        self.auditor
    }

    /// Prints the menu and handles selections until exit or end of input.
    ///
    /// # Errors
    /// Returns an error if reading `input` or writing `out` fails.
    pub fn run(&mut self, input: &mut dyn BufRead, out: &mut dyn Write) -> io::Result<()> {
        while self.state == MenuState::Running {
            print_menu(out)?;
            write!(out, "{}", PROMPT.yellow())?;
            out.flush()?;

            // Non UTF-8 input is decoded lossily and rejected as an invalid choice.
            let mut buf = Vec::new();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(out)?;
                self.state = MenuState::Terminated;
                break;
            }
            self.handle(&String::from_utf8_lossy(&buf), out)?;
        }
        Ok(())
    }

    /// Handles a single line of input.
    ///
    /// # Errors
    /// Returns an error if writing `out` fails.
    pub fn handle(&mut self, line: &str, out: &mut dyn Write) -> io::Result<()> {
        match MenuChoice::parse(line) {
            Some(MenuChoice::Exit) => {
                writeln!(out, "{}", FAREWELL.green())?;
                self.state = MenuState::Terminated;
            }
            Some(choice) => {
                for section in choice.sections() {
                    self.auditor.run_section(section, out)?;
                }
            }
            None => writeln!(out, "{}", INVALID_CHOICE.red())?,
        }
        Ok(())
    }
}

fn print_menu(out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        "Network Configuration Audit Menu:".green()
    )?;
    for choice in MenuChoice::iter() {
        writeln!(
            out,
            "{}. {}",
            choice.number(),
            choice.get_message().unwrap_or_default()
        )?;
    }
    Ok(())
}
