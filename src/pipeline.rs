// One collection run: collect, write, optionally publish.

use chrono::Utc;

use crate::collectors::{Collection, Probes, collect_snapshot};
use crate::config::AppConfig;
use crate::executor::CommandRunner;
use crate::publisher::Publisher;
use crate::repos::{BanTool, ContainerRuntime, HostProbe, ServiceManager};
use crate::sink;

/// Collector failures never surface here; only a failed write of the output file does.
pub async fn run<H, B, C, S, R>(
    probes: &Probes<H, B, C, S>,
    publisher: &Publisher<'_, R>,
    config: &AppConfig,
) -> anyhow::Result<Collection>
where
    H: HostProbe,
    B: BanTool,
    C: ContainerRuntime,
    S: ServiceManager,
    R: CommandRunner,
{
    let collection = collect_snapshot(probes, config, Utc::now()).await;
    if collection.is_degraded() {
        tracing::info!(fallbacks = ?collection.fallbacks, "snapshot contains placeholder values");
    }

    sink::write_snapshot(&config.output.path, &collection.snapshot).await?;
    tracing::info!(path = %config.output.path.display(), "stats saved");

    publisher.publish_or_warn(&collection.snapshot).await;
    Ok(collection)
}
