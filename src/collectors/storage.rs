// Storage totals summed across the monitored mounts

use std::path::PathBuf;

use crate::models::{Reading, StorageStats};
use crate::repos::{HostProbe, QueryError};

use super::round1;

const BYTES_PER_TB: f64 = 1_099_511_627_776.0; // 1024^4

/// All-or-nothing: one unreadable mount discards the sums gathered so far and the whole
/// fallback tuple is reported. Paths that do not exist are skipped.
pub async fn collect_storage(host: &impl HostProbe, paths: &[PathBuf]) -> Reading<StorageStats> {
    match sum_usage(host, paths).await {
        Ok((total_bytes, used_bytes)) => storage_from_bytes(total_bytes, used_bytes),
        Err(e) => {
            tracing::warn!(error = %e, operation = "collect_storage", "disk usage query failed");
            Reading::Fallback(StorageStats::FALLBACK)
        }
    }
}

async fn sum_usage(host: &impl HostProbe, paths: &[PathBuf]) -> Result<(u64, u64), QueryError> {
    let mut total_bytes = 0u64;
    let mut used_bytes = 0u64;
    for path in paths {
        if !host.path_exists(path) {
            continue;
        }
        if let Some(usage) = host.disk_usage(path).await? {
            total_bytes = total_bytes.saturating_add(usage.total_bytes);
            used_bytes = used_bytes.saturating_add(usage.used_bytes);
        }
    }
    Ok((total_bytes, used_bytes))
}

/// Converts byte sums to the reported figures. Each field that comes out zero or negative
/// is replaced by its own placeholder, independently of the others.
pub fn storage_from_bytes(total_bytes: u64, used_bytes: u64) -> Reading<StorageStats> {
    let total_tb = total_bytes as f64 / BYTES_PER_TB;
    let used_tb = used_bytes as f64 / BYTES_PER_TB;
    let available_tb = total_tb - used_tb;
    let percentage_used = if total_tb > 0.0 {
        used_tb / total_tb * 100.0
    } else {
        0.0
    };

    let fallback = StorageStats::FALLBACK;
    let stats = StorageStats {
        total_tb: if total_tb > 0.0 { round1(total_tb) } else { fallback.total_tb },
        used_tb: if used_tb > 0.0 { round1(used_tb) } else { fallback.used_tb },
        available_tb: if available_tb > 0.0 {
            round1(available_tb)
        } else {
            fallback.available_tb
        },
        percentage_used: if percentage_used > 0.0 {
            percentage_used.round_ties_even() as u32
        } else {
            fallback.percentage_used
        },
    };

    if total_tb > 0.0 && used_tb > 0.0 && available_tb > 0.0 && percentage_used > 0.0 {
        Reading::Measured(stats)
    } else {
        Reading::Fallback(stats)
    }
}
