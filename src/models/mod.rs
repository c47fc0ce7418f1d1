// Snapshot models (JSON keys are snake_case, as the dashboard reads them)

mod container;
mod network;
mod reading;
mod security;
mod service;
mod snapshot;
mod storage;
mod uptime;

pub use container::ContainerCounts;
pub use network::NetworkStats;
pub use reading::Reading;
pub use security::SecurityStats;
pub use service::{ServiceReport, ServiceStatus};
pub use snapshot::{Snapshot, SnapshotSummary, format_timestamp};
pub use storage::StorageStats;
pub use uptime::{DAYS_MONITORED, UptimeStats};
