// Docker container counts

use serde::{Deserialize, Serialize};

/// Counts as reported by the runtime; `running <= total` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerCounts {
    pub running: u64,
    pub total: u64,
    pub healthy: u64,
    pub unhealthy: u64,
}
