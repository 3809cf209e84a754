use regex::Regex;
use std::sync::OnceLock;

/// Verdict of a UFW rule, used only for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RuleAction {
    /// `ALLOW`
    Allow,
    /// `DENY`
    Deny,
    /// `REJECT`
    Reject,
    /// `LIMIT`
    Limit,
    /// No recognizable verdict on the line
    #[strum(disabled)]
    Unknown,
}

/// One numbered UFW rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirewallRuleLine {
    /// The line as printed by `ufw status numbered`
    pub raw_text: String,
    /// First verdict word found on the line
    pub action: RuleAction,
}

fn action_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\b(ALLOW|DENY|REJECT|LIMIT)\b").ok())
        .as_ref()
}

fn detect_action(line: &str) -> RuleAction {
    action_pattern()
        .and_then(|re| re.captures(line))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(RuleAction::Unknown)
}

/// Parses `ufw status numbered` output, keeping only lines that start with `[`.
pub fn parse_firewall_rules(output: &str) -> Vec<FirewallRuleLine> {
    output
        .lines()
        .filter(|line| line.starts_with('['))
        .map(|line| FirewallRuleLine {
            raw_text: line.trim_end().to_string(),
            action: detect_action(line),
        })
        .collect()
}
