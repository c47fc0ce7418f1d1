// Capability interfaces over the host's external tools, with shell-backed implementations.
//
// Collectors only see these traits, so tests swap in fakes instead of needing docker,
// systemctl or fail2ban on the machine.

mod docker;
mod fail2ban;
mod host;
mod systemd;

pub use docker::DockerRepo;
pub use fail2ban::Fail2banRepo;
pub use host::{HostRepo, parse_df_line, parse_proc_uptime};
pub use systemd::SystemdRepo;

use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The tool could not answer at all. The shell-backed repos never produce this (a
    /// failing command reads as empty output); it is for backends with their own errors.
    #[error("{tool} query failed: {message}")]
    Failed { tool: &'static str, message: String },
    #[error("unparseable {what}: {value:?}")]
    Parse { what: &'static str, value: String },
}

/// Byte totals for one mount, as `df -B1` reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathUsage {
    pub total_bytes: u64,
    pub used_bytes: u64,
}

/// Host-level facts: uptime and filesystem usage.
pub trait HostProbe {
    /// Seconds since boot, `None` when unreadable.
    async fn uptime_seconds(&self) -> Option<f64>;

    fn path_exists(&self, path: &Path) -> bool;

    /// `Ok(None)` when the usage line is too short to read (the path is skipped);
    /// `Err` when a figure in it is not a number.
    async fn disk_usage(&self, path: &Path) -> Result<Option<PathUsage>, QueryError>;
}

/// Intrusion-prevention counters.
pub trait BanTool {
    /// Cumulative banned count from the tool's status output.
    async fn total_banned(&self) -> Option<u64>;

    /// Lines mentioning `Ban` anywhere in the log. Not limited to any time window.
    async fn ban_log_matches(&self, log: &Path) -> Option<u64>;

    /// Sum of the currently-banned figures across jails.
    async fn active_bans(&self) -> Option<u64>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerFilter {
    Running,
    All,
    Healthy,
    Unhealthy,
}

pub trait ContainerRuntime {
    /// Containers matching `filter`; `None` when nothing could be counted.
    async fn count(&self, filter: ContainerFilter) -> Option<u64>;

    async fn is_running(&self, name: &str) -> Result<bool, QueryError>;

    /// Raw `.State.StartedAt`; `None` when the runtime printed nothing.
    async fn started_at(&self, name: &str) -> Result<Option<String>, QueryError>;

    /// Raw health-check state; empty when the container defines no health check.
    async fn health_status(&self, name: &str) -> Result<String, QueryError>;
}

pub trait ServiceManager {
    async fn is_active(&self, unit: &str) -> Result<bool, QueryError>;

    /// Raw `ActiveEnterTimestamp` value; `None` when the property is missing.
    async fn active_since(&self, unit: &str) -> Result<Option<String>, QueryError>;
}

/// Whole-string non-negative integer (ASCII digits only, no sign or spaces).
pub(crate) fn parse_count(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Non-empty output lines, e.g. one container id per line. Empty output is `None`: an
/// empty listing cannot be told apart from an unreachable tool.
pub(crate) fn count_lines(s: &str) -> Option<u64> {
    let n = s.lines().filter(|l| !l.trim().is_empty()).count() as u64;
    (n > 0).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_count_accepts_digits_only() {
        assert_eq!(parse_count("42"), Some(42));
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("-3"), None);
        assert_eq!(parse_count("4 2"), None);
        assert_eq!(parse_count("12\n13"), None);
    }

    #[test]
    fn count_lines_skips_blank_lines() {
        assert_eq!(count_lines("abc\ndef\n\n123\n"), Some(3));
        assert_eq!(count_lines(""), None);
        assert_eq!(count_lines("\n  \n"), None);
    }
}
