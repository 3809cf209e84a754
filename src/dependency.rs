use crate::command::CommandRunner;

/// Programs the audit needs when no configuration overrides them.
pub const DEFAULT_REQUIRED_PROGRAMS: [&str; 4] = ["ip", "ss", "ufw", "docker"];

/// Outcome of a dependency check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyReport {
    /// Required programs that could not be resolved, in check order
    pub missing: Vec<String>,
}

impl DependencyReport {
    /// `true` when every required program was found.
    pub fn ok(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Checks that every program in `required` is resolvable by `runner`.
pub fn check_dependencies<R, I>(runner: &R, required: I) -> DependencyReport
where
    R: CommandRunner,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let missing = required
        .into_iter()
        .filter(|program| !runner.is_installed(program.as_ref()))
        .map(|program| program.as_ref().to_string())
        .collect();
    DependencyReport { missing }
}
