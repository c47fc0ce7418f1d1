// systemd unit state via systemctl

use super::{QueryError, ServiceManager};
use crate::executor::{CommandExecutor, CommandRunner};
use tracing::instrument;

const ACTIVE_ENTER_PROPERTY: &str = "ActiveEnterTimestamp=";

pub struct SystemdRepo<R = CommandExecutor> {
    runner: R,
}

impl<R: CommandRunner> SystemdRepo<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> ServiceManager for SystemdRepo<R> {
    #[instrument(skip(self), fields(repo = "systemd", operation = "is_active"))]
    async fn is_active(&self, unit: &str) -> Result<bool, QueryError> {
        let state = self.runner.run("systemctl", &["is-active", unit]).await;
        Ok(state == "active")
    }

    #[instrument(skip(self), fields(repo = "systemd", operation = "active_since"))]
    async fn active_since(&self, unit: &str) -> Result<Option<String>, QueryError> {
        let out = self
            .runner
            .run("systemctl", &["show", unit, "--property=ActiveEnterTimestamp"])
            .await;
        Ok(parse_active_enter(&out))
    }
}

/// Value of `ActiveEnterTimestamp=...`; may be empty for a unit that never started.
fn parse_active_enter(out: &str) -> Option<String> {
    if !out.contains(ACTIVE_ENTER_PROPERTY) {
        return None;
    }
    out.split('=').nth(1).map(|v| v.trim().to_string())
}
