// The dashboard snapshot: one fixed-shape record per run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    ContainerCounts, NetworkStats, SecurityStats, ServiceReport, StorageStats, UptimeStats,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: String,
    pub uptime: UptimeStats,
    pub security: SecurityStats,
    pub containers: ContainerCounts,
    pub storage: StorageStats,
    pub services: Vec<ServiceReport>,
    pub network: NetworkStats,
}

/// UTC instant as `2026-01-01T12:00:00.000000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

impl Snapshot {
    pub fn healthy_services(&self) -> usize {
        self.services.iter().filter(|s| s.status.is_healthy()).count()
    }

    /// Human-readable run summary for stdout.
    pub fn summary(&self) -> SnapshotSummary<'_> {
        SnapshotSummary(self)
    }
}

pub struct SnapshotSummary<'a>(&'a Snapshot);

impl fmt::Display for SnapshotSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(f, "Homelab Stats Summary")?;
        writeln!(f, "=====================")?;
        writeln!(f, "Uptime:     {}%", s.uptime.percentage)?;
        writeln!(
            f,
            "Security:   {} attacks blocked (24h)",
            s.security.attacks_blocked_24h
        )?;
        writeln!(
            f,
            "Containers: {}/{} running",
            s.containers.running, s.containers.total
        )?;
        writeln!(
            f,
            "Storage:    {}/{} TB used",
            s.storage.used_tb, s.storage.total_tb
        )?;
        write!(
            f,
            "Services:   {}/{} healthy",
            s.healthy_services(),
            s.services.len()
        )
    }
}
