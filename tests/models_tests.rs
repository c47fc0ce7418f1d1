// Snapshot JSON shape and summary rendering

use chrono::{TimeZone, Utc};
use homelab_stats::models::*;

fn sample_snapshot() -> Snapshot {
    Snapshot {
        timestamp: "2026-01-10T12:00:00.000000Z".into(),
        uptime: UptimeStats::new(99.5),
        security: SecurityStats {
            attacks_blocked_24h: 100,
            attacks_blocked_total: 45_000,
            active_bans: 3,
            last_attack: "2026-01-10T11:58:00.000000Z".into(),
        },
        containers: ContainerCounts {
            running: 24,
            total: 26,
            healthy: 24,
            unhealthy: 0,
        },
        storage: StorageStats::FALLBACK,
        services: vec![
            ServiceReport {
                name: "Grafana".into(),
                status: ServiceStatus::Healthy,
                uptime_hours: 12,
                last_check: "2026-01-10T12:00:00.000000Z".into(),
            },
            ServiceReport {
                name: "Jellyfin".into(),
                status: ServiceStatus::Reported("unhealthy".into()),
                uptime_hours: 720,
                last_check: "2026-01-10T12:00:00.000000Z".into(),
            },
            ServiceReport {
                name: "Nextcloud".into(),
                status: ServiceStatus::Stopped,
                uptime_hours: 720,
                last_check: "2026-01-10T12:00:00.000000Z".into(),
            },
        ],
        network: NetworkStats::PLACEHOLDER,
    }
}

#[test]
fn test_snapshot_json_has_dashboard_shape() {
    let v = serde_json::to_value(sample_snapshot()).unwrap();
    let obj = v.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "containers",
            "network",
            "security",
            "services",
            "storage",
            "timestamp",
            "uptime"
        ]
    );

    assert_eq!(v["uptime"]["percentage"], 99.5);
    assert_eq!(v["uptime"]["days_monitored"], 30);
    assert!(v["uptime"]["last_incident"].is_null());
    assert_eq!(v["security"]["attacks_blocked_24h"], 100);
    assert_eq!(v["security"]["last_attack"], "2026-01-10T11:58:00.000000Z");
    assert_eq!(v["containers"]["healthy"], 24);
    assert_eq!(v["storage"]["total_tb"], 6.0);
    assert_eq!(v["storage"]["used_tb"], 3.2);
    assert_eq!(v["storage"]["available_tb"], 2.8);
    assert_eq!(v["storage"]["percentage_used"], 53);
    assert_eq!(v["network"]["bytes_in_24h"], 12_500_000_000u64);
    assert_eq!(v["network"]["bytes_out_24h"], 8_900_000_000u64);
    assert_eq!(v["network"]["active_connections"], 42);
}

#[test]
fn test_service_status_serializes_as_bare_string() {
    let v = serde_json::to_value(sample_snapshot()).unwrap();
    let services = v["services"].as_array().unwrap();
    assert_eq!(services[0]["status"], "healthy");
    assert_eq!(services[1]["status"], "unhealthy");
    assert_eq!(services[2]["status"], "stopped");
    assert_eq!(services[2]["uptime_hours"], 720);
    assert_eq!(services[0]["last_check"], "2026-01-10T12:00:00.000000Z");
}

#[test]
fn test_service_status_parses_known_and_reported_states() {
    let s: ServiceStatus = serde_json::from_str("\"unknown\"").unwrap();
    assert_eq!(s, ServiceStatus::Unknown);
    let s: ServiceStatus = serde_json::from_str("\"starting\"").unwrap();
    assert_eq!(s, ServiceStatus::Reported("starting".into()));
}

#[test]
fn test_health_mapping() {
    assert_eq!(ServiceStatus::from_health(""), ServiceStatus::Healthy);
    assert_eq!(ServiceStatus::from_health("healthy"), ServiceStatus::Healthy);
    assert_eq!(
        ServiceStatus::from_health("unhealthy"),
        ServiceStatus::Reported("unhealthy".into())
    );
}

#[test]
fn test_format_timestamp_is_utc_with_micros() {
    let at = Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
    assert_eq!(format_timestamp(at), "2026-03-04T05:06:07.000000Z");
}

#[test]
fn test_summary_lists_headline_figures() {
    let summary = sample_snapshot().summary().to_string();
    assert!(summary.starts_with("Homelab Stats Summary"));
    assert!(summary.contains("Uptime:     99.5%"), "{summary}");
    assert!(summary.contains("Security:   100 attacks blocked (24h)"), "{summary}");
    assert!(summary.contains("Containers: 24/26 running"), "{summary}");
    assert!(summary.contains("Storage:    3.2/6 TB used"), "{summary}");
    assert!(summary.contains("Services:   1/3 healthy"), "{summary}");
}

#[test]
fn test_reading_tags() {
    let measured = Reading::Measured(3);
    let fallback = Reading::Fallback(4);
    assert!(!measured.is_fallback());
    assert!(fallback.is_fallback());
    assert_eq!(*fallback.value(), 4);
    assert_eq!(measured.into_value(), 3);
}
