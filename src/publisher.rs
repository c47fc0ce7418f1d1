// Optional git mirror: clone or pull a working copy, drop the snapshot in, commit and push.

use std::path::PathBuf;

use crate::config::PublishConfig;
use crate::executor::{CommandError, CommandExecutor, CommandRunner};
use crate::models::Snapshot;
use crate::sink;

const COMMIT_MESSAGE: &str = "Update homelab stats";

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("git {step} failed: {source}")]
    Git {
        step: &'static str,
        #[source]
        source: CommandError,
    },
    #[error("no working copy at {0}")]
    MissingWorkdir(PathBuf),
    #[error("writing snapshot into working copy: {0:#}")]
    Write(anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// No repository configured.
    Disabled,
    Pushed,
}

pub struct Publisher<'a, R = CommandExecutor> {
    runner: R,
    config: &'a PublishConfig,
}

impl<'a, R: CommandRunner> Publisher<'a, R> {
    pub fn new(runner: R, config: &'a PublishConfig) -> Self {
        Self { runner, config }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Publish and log any failure. Publishing never fails the run.
    pub async fn publish_or_warn(&self, snapshot: &Snapshot) {
        match self.publish(snapshot).await {
            Ok(PublishOutcome::Pushed) => tracing::info!(
                repository = self.config.repository.as_deref().unwrap_or_default(),
                "snapshot pushed"
            ),
            Ok(PublishOutcome::Disabled) => {}
            Err(e) => tracing::warn!(error = %e, operation = "publish", "publish failed"),
        }
    }

    pub async fn publish(&self, snapshot: &Snapshot) -> Result<PublishOutcome, PublishError> {
        let Some(url) = self.config.remote_url() else {
            return Ok(PublishOutcome::Disabled);
        };
        let workdir = &self.config.workdir;
        let dir = workdir.to_string_lossy().into_owned();
        let dir = dir.as_str();
        let branch = self.config.branch.as_str();

        if workdir.exists() {
            // Not fatal: the snapshot is committed on top of the stale copy.
            if let Err(e) = self
                .runner
                .try_run("git", &["-C", dir, "pull", "origin", branch])
                .await
            {
                tracing::warn!(error = %e, operation = "git_pull", "pull failed, continuing");
            }
        } else {
            self.git("clone", &["clone", "--branch", branch, url.as_str(), dir])
                .await?;
        }
        if !workdir.is_dir() {
            return Err(PublishError::MissingWorkdir(workdir.clone()));
        }

        let file_name = self.config.file_name.as_str();
        sink::write_snapshot(&workdir.join(file_name), snapshot)
            .await
            .map_err(PublishError::Write)?;

        self.git("add", &["-C", dir, "add", file_name]).await?;
        self.git("commit", &["-C", dir, "commit", "-m", COMMIT_MESSAGE])
            .await?;
        self.git("push", &["-C", dir, "push", "origin", branch])
            .await?;
        Ok(PublishOutcome::Pushed)
    }

    async fn git(&self, step: &'static str, args: &[&str]) -> Result<(), PublishError> {
        self.runner
            .try_run("git", args)
            .await
            .map(|_| ())
            .map_err(|source| PublishError::Git { step, source })
    }
}
