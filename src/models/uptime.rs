// Host uptime model

use serde::{Deserialize, Serialize};

/// Length of the window the uptime percentage is measured against.
pub const DAYS_MONITORED: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UptimeStats {
    /// 0–100, one decimal.
    pub percentage: f64,
    pub days_monitored: u32,
    /// No incident tracking exists; always `null`.
    pub last_incident: Option<String>,
}

impl UptimeStats {
    pub fn new(percentage: f64) -> Self {
        Self {
            percentage,
            days_monitored: DAYS_MONITORED,
            last_incident: None,
        }
    }
}
