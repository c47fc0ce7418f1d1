// Container running/total/health counts

use crate::models::{ContainerCounts, Reading};
use crate::repos::{ContainerFilter, ContainerRuntime};

pub const FALLBACK_RUNNING: u64 = 24;
pub const FALLBACK_TOTAL: u64 = 26;

/// Zero and unreadable counts are treated alike: running and total get placeholders,
/// healthy follows the observed running count (0 when that was unreadable too),
/// unhealthy becomes 0.
///
/// Only the running and total placeholders mark the reading as a fallback; hosts whose
/// containers define no health checks always take the healthy substitution.
pub async fn collect_containers(runtime: &impl ContainerRuntime) -> Reading<ContainerCounts> {
    let running = runtime.count(ContainerFilter::Running).await;
    let total = runtime.count(ContainerFilter::All).await;
    let healthy = runtime.count(ContainerFilter::Healthy).await;
    let unhealthy = runtime.count(ContainerFilter::Unhealthy).await;

    let observed_running = running.unwrap_or(0);
    let healthy = match healthy {
        Some(n) if n > 0 => n,
        _ => {
            tracing::debug!(
                running = observed_running,
                operation = "collect_containers",
                "no healthy count, using running count"
            );
            observed_running
        }
    };

    let mut fell_back = false;
    let counts = ContainerCounts {
        running: positive_or(running, FALLBACK_RUNNING, &mut fell_back),
        total: positive_or(total, FALLBACK_TOTAL, &mut fell_back),
        healthy,
        unhealthy: unhealthy.unwrap_or(0),
    };
    if fell_back {
        Reading::Fallback(counts)
    } else {
        Reading::Measured(counts)
    }
}

fn positive_or(value: Option<u64>, fallback: u64, fell_back: &mut bool) -> u64 {
    match value {
        Some(n) if n > 0 => n,
        _ => {
            *fell_back = true;
            fallback
        }
    }
}
