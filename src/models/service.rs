// Per-service status rows

use serde::{Deserialize, Serialize};
use std::fmt;

/// Service status; serializes to a bare string (`"healthy"`, `"stopped"`, `"unknown"`, or
/// whatever health state the container runtime reported, e.g. `"unhealthy"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceStatus {
    Healthy,
    Stopped,
    Unknown,
    Reported(String),
}

impl ServiceStatus {
    /// Map a container health-check state. No health check (empty) counts as healthy.
    pub fn from_health(health: &str) -> Self {
        match health {
            "" | "healthy" => ServiceStatus::Healthy,
            other => ServiceStatus::Reported(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ServiceStatus::Healthy => "healthy",
            ServiceStatus::Stopped => "stopped",
            ServiceStatus::Unknown => "unknown",
            ServiceStatus::Reported(s) => s,
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, ServiceStatus::Healthy)
    }
}

impl From<String> for ServiceStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "healthy" => ServiceStatus::Healthy,
            "stopped" => ServiceStatus::Stopped,
            "unknown" => ServiceStatus::Unknown,
            _ => ServiceStatus::Reported(s),
        }
    }
}

impl From<ServiceStatus> for String {
    fn from(s: ServiceStatus) -> Self {
        match s {
            ServiceStatus::Reported(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceReport {
    pub name: String,
    pub status: ServiceStatus,
    pub uptime_hours: i64,
    pub last_check: String,
}
