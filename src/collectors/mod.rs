// Collectors and the aggregator that turns their readings into one Snapshot.
//
// Collectors run one after another; each owns its fallback policy, so the snapshot is
// always fully populated.

pub mod containers;
pub mod security;
pub mod services;
pub mod storage;
pub mod uptime;

use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::executor::CommandExecutor;
use crate::models::{NetworkStats, Reading, Snapshot, format_timestamp};
use crate::repos::{
    BanTool, ContainerRuntime, DockerRepo, Fail2banRepo, HostProbe, HostRepo, ServiceManager,
    SystemdRepo,
};

/// The external facilities the collectors query.
pub struct Probes<H, B, C, S> {
    pub host: H,
    pub bans: B,
    pub containers: C,
    pub services: S,
}

/// Probes backed by the real tools on this host.
pub type SystemProbes = Probes<HostRepo, Fail2banRepo, DockerRepo, SystemdRepo>;

impl SystemProbes {
    pub fn from_config(config: &AppConfig) -> Self {
        let executor = CommandExecutor::new(config.collector.command_timeout());
        Probes {
            host: HostRepo::new(executor.clone(), config.collector.uptime_path.clone()),
            bans: Fail2banRepo::new(executor.clone()),
            containers: DockerRepo::new(executor.clone()),
            services: SystemdRepo::new(executor),
        }
    }
}

/// Names used when reporting which collectors fell back.
pub const UPTIME: &str = "uptime";
pub const SECURITY: &str = "security";
pub const CONTAINERS: &str = "containers";
pub const STORAGE: &str = "storage";
pub const SERVICES: &str = "services";

/// A snapshot plus the collectors that substituted placeholder values for it.
#[derive(Debug, Clone)]
pub struct Collection {
    pub snapshot: Snapshot,
    pub fallbacks: Vec<&'static str>,
}

impl Collection {
    pub fn is_degraded(&self) -> bool {
        !self.fallbacks.is_empty()
    }
}

pub async fn collect_snapshot<H, B, C, S>(
    probes: &Probes<H, B, C, S>,
    config: &AppConfig,
    now: DateTime<Utc>,
) -> Collection
where
    H: HostProbe,
    B: BanTool,
    C: ContainerRuntime,
    S: ServiceManager,
{
    let mut fallbacks = Vec::new();

    let uptime = note(&mut fallbacks, UPTIME, uptime::collect_uptime(&probes.host).await);
    let security = note(
        &mut fallbacks,
        SECURITY,
        security::collect_security(&probes.bans, &config.security.fail2ban_log, now).await,
    );
    let containers = note(
        &mut fallbacks,
        CONTAINERS,
        containers::collect_containers(&probes.containers).await,
    );
    let storage = note(
        &mut fallbacks,
        STORAGE,
        storage::collect_storage(&probes.host, &config.storage.paths).await,
    );
    let services = note(
        &mut fallbacks,
        SERVICES,
        services::collect_services(
            &config.services,
            &probes.containers,
            &probes.services,
            now,
        )
        .await,
    );

    Collection {
        snapshot: Snapshot {
            timestamp: format_timestamp(now),
            uptime,
            security,
            containers,
            storage,
            services,
            network: NetworkStats::PLACEHOLDER,
        },
        fallbacks,
    }
}

fn note<T>(fallbacks: &mut Vec<&'static str>, collector: &'static str, reading: Reading<T>) -> T {
    if reading.is_fallback() {
        tracing::warn!(collector, "using placeholder values");
        fallbacks.push(collector);
    }
    reading.into_value()
}

/// Rounds to one decimal, ties to even.
pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round_ties_even() / 10.0
}
