// Fail2ban counters via `fail2ban-client status` and the fail2ban log.

use super::{BanTool, parse_count};
use crate::executor::{CommandExecutor, CommandRunner};
use std::path::Path;
use tracing::instrument;

pub struct Fail2banRepo<R = CommandExecutor> {
    runner: R,
}

impl<R: CommandRunner> Fail2banRepo<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn status(&self) -> String {
        self.runner.run("fail2ban-client", &["status"]).await
    }
}

impl<R: CommandRunner> BanTool for Fail2banRepo<R> {
    #[instrument(skip(self), fields(repo = "fail2ban", operation = "total_banned"))]
    async fn total_banned(&self) -> Option<u64> {
        parse_total_banned(&self.status().await)
    }

    #[instrument(skip(self), fields(repo = "fail2ban", operation = "ban_log_matches"))]
    async fn ban_log_matches(&self, log: &Path) -> Option<u64> {
        match tokio::fs::read(log).await {
            Ok(bytes) => Some(count_ban_lines(&String::from_utf8_lossy(&bytes))),
            Err(e) => {
                tracing::debug!(error = %e, path = %log.display(), "fail2ban log unreadable");
                None
            }
        }
    }

    #[instrument(skip(self), fields(repo = "fail2ban", operation = "active_bans"))]
    async fn active_bans(&self) -> Option<u64> {
        parse_currently_banned(&self.status().await)
    }
}

/// Last token of the `Total banned` line. More than one such line is ambiguous and
/// reads as unknown.
pub(crate) fn parse_total_banned(status: &str) -> Option<u64> {
    let mut lines = status.lines().filter(|l| l.contains("Total banned"));
    let line = lines.next()?;
    if lines.next().is_some() {
        return None;
    }
    parse_count(line.split_whitespace().last()?)
}

/// Sum of every `Currently banned: N` figure.
pub(crate) fn parse_currently_banned(status: &str) -> Option<u64> {
    const MARKER: &str = "Currently banned:";
    let figures: Vec<u64> = status
        .lines()
        .filter_map(|l| {
            let rest = &l[l.find(MARKER)? + MARKER.len()..];
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }
            let digits: String = rest
                .trim_start()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().ok()
        })
        .collect();
    if figures.is_empty() {
        return None;
    }
    Some(figures.iter().sum())
}

/// Lines containing `Ban` (case-sensitive; `Unban` lines do not match).
pub(crate) fn count_ban_lines(log: &str) -> u64 {
    log.lines().filter(|l| l.contains("Ban")).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAIL_STATUS: &str = "Status for the jail: sshd
|- Filter
|  |- Currently failed:\t3
|  |- Total failed:\t120
|  `- File list:\t/var/log/auth.log
`- Actions
   |- Currently banned:\t7
   |- Total banned:\t431
   `- Banned IP list:\t1.2.3.4";

    #[test]
    fn total_banned_reads_last_token() {
        assert_eq!(parse_total_banned(JAIL_STATUS), Some(431));
    }

    #[test]
    fn total_banned_missing_line_is_none() {
        let status = "Status\n|- Number of jail:\t2\n`- Jail list:\tsshd, nginx";
        assert_eq!(parse_total_banned(status), None);
        assert_eq!(parse_total_banned(""), None);
    }

    #[test]
    fn currently_banned_sums_jails() {
        let two = format!("{JAIL_STATUS}\n   |- Currently banned:  5");
        assert_eq!(parse_currently_banned(&two), Some(12));
        assert_eq!(parse_currently_banned("nothing here"), None);
    }

    #[test]
    fn ban_lines_are_case_sensitive() {
        let log = "2026-01-01 fail2ban.actions [1]: NOTICE [sshd] Ban 1.2.3.4
2026-01-01 fail2ban.actions [1]: NOTICE [sshd] Unban 1.2.3.4
2026-01-01 fail2ban.filter  [1]: INFO [sshd] Found 1.2.3.4
2026-01-02 fail2ban.actions [1]: NOTICE [sshd] Ban 5.6.7.8";
        assert_eq!(count_ban_lines(log), 2);
    }
}
