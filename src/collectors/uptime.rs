// Uptime as a share of a 30-day window

use crate::models::{DAYS_MONITORED, Reading, UptimeStats};
use crate::repos::HostProbe;

use super::round1;

/// Reported when uptime cannot be read.
pub const FALLBACK_PERCENTAGE: f64 = 99.5;

const WINDOW_SECS: f64 = DAYS_MONITORED as f64 * 24.0 * 60.0 * 60.0;

/// Seconds since boot over the window, capped at 100 and rounded to one decimal. Reboots
/// are not tracked, so any host up longer than the window reads exactly 100.0.
pub fn uptime_percentage(uptime_secs: f64) -> f64 {
    round1((uptime_secs / WINDOW_SECS * 100.0).clamp(0.0, 100.0))
}

pub async fn collect_uptime(host: &impl HostProbe) -> Reading<UptimeStats> {
    match host.uptime_seconds().await {
        Some(secs) if secs.is_finite() && secs >= 0.0 => {
            Reading::Measured(UptimeStats::new(uptime_percentage(secs)))
        }
        _ => Reading::Fallback(UptimeStats::new(FALLBACK_PERCENTAGE)),
    }
}
