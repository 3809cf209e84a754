//! Scripted command runner and log sink shared by the unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::command::{command_line, CommandError, CommandRunner};

#[derive(Debug, Clone)]
enum Scripted {
    Output(String),
    Failure(String),
}

/// Returns scripted output per command line and records every invocation.
/// Unscripted commands succeed with empty output.
#[derive(Debug, Default)]
pub(crate) struct FakeRunner {
    scripted: HashMap<String, Scripted>,
    missing: HashSet<String>,
    calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub(crate) fn with_output(mut self, command: &str, output: &str) -> Self {
        self.scripted
            .insert(command.to_string(), Scripted::Output(output.to_string()));
        self
    }

    pub(crate) fn with_failure(mut self, command: &str, stderr: &str) -> Self {
        self.scripted
            .insert(command.to_string(), Scripted::Failure(stderr.to_string()));
        self
    }

    pub(crate) fn without(mut self, program: &str) -> Self {
        self.missing.insert(program.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let command = command_line(program, args);
        self.calls.borrow_mut().push(command.clone());
        if self.missing.contains(program) {
            return Err(CommandError::NotInstalled {
                program: program.to_string(),
            });
        }
        match self.scripted.get(&command) {
            Some(Scripted::Output(out)) => Ok(out.clone()),
            Some(Scripted::Failure(stderr)) => Err(CommandError::Failed {
                command,
                code: Some(1),
                stderr: stderr.clone(),
            }),
            None => Ok(String::new()),
        }
    }

    fn is_installed(&self, program: &str) -> bool {
        !self.missing.contains(program)
    }
}

/// In-memory writer whose contents stay readable after it is boxed into a log.
#[derive(Debug, Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("poisoned buffer"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
