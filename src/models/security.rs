// Fail2ban block counters

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityStats {
    pub attacks_blocked_24h: u64,
    pub attacks_blocked_total: u64,
    pub active_bans: u64,
    /// Synthetic: always two minutes before the collection instant.
    pub last_attack: String,
}
