// Docker container queries via the docker CLI

use super::{ContainerFilter, ContainerRuntime, QueryError, count_lines};
use crate::executor::{CommandExecutor, CommandRunner};
use tracing::instrument;

pub struct DockerRepo<R = CommandExecutor> {
    runner: R,
}

impl<R: CommandRunner> DockerRepo<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn inspect(&self, name: &str, template: &str) -> String {
        self.runner
            .run("docker", &["inspect", "-f", template, name])
            .await
    }
}

/// `docker ps` arguments for each count; health filters only match containers that
/// define a health check.
fn ps_args(filter: ContainerFilter) -> &'static [&'static str] {
    match filter {
        ContainerFilter::Running => &["ps", "-q"],
        ContainerFilter::All => &["ps", "-aq"],
        ContainerFilter::Healthy => &["ps", "--filter", "health=healthy", "-q"],
        ContainerFilter::Unhealthy => &["ps", "--filter", "health=unhealthy", "-q"],
    }
}

impl<R: CommandRunner> ContainerRuntime for DockerRepo<R> {
    #[instrument(skip(self), fields(repo = "docker", operation = "count"))]
    async fn count(&self, filter: ContainerFilter) -> Option<u64> {
        count_lines(&self.runner.run("docker", ps_args(filter)).await)
    }

    #[instrument(skip(self), fields(repo = "docker", operation = "is_running"))]
    async fn is_running(&self, name: &str) -> Result<bool, QueryError> {
        // `name=` is the runtime's substring match, not an exact name lookup.
        let filter = format!("name={name}");
        let ids = self.runner.run("docker", &["ps", "-q", "-f", filter.as_str()]).await;
        Ok(!ids.is_empty())
    }

    #[instrument(skip(self), fields(repo = "docker", operation = "started_at"))]
    async fn started_at(&self, name: &str) -> Result<Option<String>, QueryError> {
        let out = self.inspect(name, "{{.State.StartedAt}}").await;
        Ok((!out.is_empty()).then_some(out))
    }

    #[instrument(skip(self), fields(repo = "docker", operation = "health_status"))]
    async fn health_status(&self, name: &str) -> Result<String, QueryError> {
        Ok(self.inspect(name, "{{.State.Health.Status}}").await)
    }
}
