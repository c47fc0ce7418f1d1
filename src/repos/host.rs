// Host facts: /proc/uptime and `df -B1` per mount.

use super::{HostProbe, PathUsage, QueryError};
use crate::executor::{CommandExecutor, CommandRunner};
use std::path::{Path, PathBuf};
use tracing::instrument;

pub struct HostRepo<R = CommandExecutor> {
    runner: R,
    uptime_path: PathBuf,
}

impl<R: CommandRunner> HostRepo<R> {
    pub fn new(runner: R, uptime_path: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            uptime_path: uptime_path.into(),
        }
    }
}

impl<R: CommandRunner> HostProbe for HostRepo<R> {
    #[instrument(skip(self), fields(repo = "host", operation = "uptime_seconds"))]
    async fn uptime_seconds(&self) -> Option<f64> {
        match tokio::fs::read_to_string(&self.uptime_path).await {
            Ok(content) => parse_proc_uptime(&content),
            Err(e) => {
                tracing::debug!(error = %e, path = %self.uptime_path.display(), "uptime file unreadable");
                None
            }
        }
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    #[instrument(skip(self), fields(repo = "host", operation = "disk_usage"))]
    async fn disk_usage(&self, path: &Path) -> Result<Option<PathUsage>, QueryError> {
        let path = path.to_string_lossy();
        let out = self.runner.run("df", &["-B1", &*path]).await;
        parse_df_line(out.lines().last().unwrap_or(""))
    }
}

/// First field of `/proc/uptime` (seconds since boot).
pub fn parse_proc_uptime(content: &str) -> Option<f64> {
    content.split_whitespace().next()?.parse().ok()
}

/// One `df -B1` data line: `filesystem size used avail use% mount`.
pub fn parse_df_line(line: &str) -> Result<Option<PathUsage>, QueryError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return Ok(None);
    }
    let field = |i: usize, what: &'static str| {
        parts[i].parse::<u64>().map_err(|_| QueryError::Parse {
            what,
            value: parts[i].to_string(),
        })
    };
    Ok(Some(PathUsage {
        total_bytes: field(1, "df size")?,
        used_bytes: field(2, "df used")?,
    }))
}
