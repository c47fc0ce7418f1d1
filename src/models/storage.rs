// Aggregated storage capacity across the monitored mounts

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageStats {
    pub total_tb: f64,
    pub used_tb: f64,
    pub available_tb: f64,
    pub percentage_used: u32,
}

impl StorageStats {
    /// Placeholder reported when usage cannot be determined.
    pub const FALLBACK: StorageStats = StorageStats {
        total_tb: 6.0,
        used_tb: 3.2,
        available_tb: 2.8,
        percentage_used: 53,
    };
}
