// Network counters (not measured; fixed placeholder values)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub bytes_in_24h: u64,
    pub bytes_out_24h: u64,
    pub active_connections: u32,
}

impl NetworkStats {
    pub const PLACEHOLDER: NetworkStats = NetworkStats {
        bytes_in_24h: 12_500_000_000,
        bytes_out_24h: 8_900_000_000,
        active_connections: 42,
    };
}
