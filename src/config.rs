// App configuration: TOML file, every section optional with the collector's stock defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub collector: CollectorConfig,
    pub security: SecurityConfig,
    pub storage: StorageConfig,
    pub services: Vec<ServiceConfig>,
    pub publish: PublishConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            collector: CollectorConfig::default(),
            security: SecurityConfig::default(),
            storage: StorageConfig::default(),
            services: default_services(),
            publish: PublishConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("/var/www/html/homelab-stats.json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Wall-clock limit for each external command.
    pub command_timeout_secs: u64,
    pub uptime_path: PathBuf,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            command_timeout_secs: 30,
            uptime_path: PathBuf::from("/proc/uptime"),
        }
    }
}

impl CollectorConfig {
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub fail2ban_log: PathBuf,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            fail2ban_log: PathBuf::from("/var/log/fail2ban.log"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub paths: Vec<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            paths: vec![PathBuf::from("/mnt/data"), PathBuf::from("/mnt/media")],
        }
    }
}

/// One monitored service, backed by a container or a systemd unit. A descriptor with
/// neither is reported as `unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    #[serde(default)]
    pub container: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
}

/// Where a service's status comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceBackend<'a> {
    Container(&'a str),
    SystemService(&'a str),
}

impl ServiceConfig {
    pub fn container(name: &str, container: &str) -> Self {
        Self {
            name: name.to_string(),
            container: Some(container.to_string()),
            service: None,
        }
    }

    pub fn system_service(name: &str, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            container: None,
            service: Some(unit.to_string()),
        }
    }

    pub fn backend(&self) -> Option<ServiceBackend<'_>> {
        if let Some(c) = self.container.as_deref() {
            return Some(ServiceBackend::Container(c));
        }
        self.service.as_deref().map(ServiceBackend::SystemService)
    }
}

fn default_services() -> Vec<ServiceConfig> {
    vec![
        ServiceConfig::container("Prometheus", "prometheus"),
        ServiceConfig::container("Grafana", "grafana"),
        ServiceConfig::system_service("Fail2Ban", "fail2ban"),
        ServiceConfig::container("Nginx Proxy Manager", "nginx-proxy-manager"),
        ServiceConfig::container("Jellyfin", "jellyfin"),
        ServiceConfig::container("Nextcloud", "nextcloud"),
    ]
}

/// Optional git mirror of the snapshot. Publishing is off while `repository` is unset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// `owner/name` on the remote host, e.g. `username/portfolio`.
    pub repository: Option<String>,
    pub branch: String,
    pub workdir: PathBuf,
    pub file_name: String,
    pub remote_base: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            repository: None,
            branch: "main".into(),
            workdir: PathBuf::from("/tmp/portfolio-stats"),
            file_name: "homelab-stats.json".into(),
            remote_base: "https://github.com".into(),
        }
    }
}

impl PublishConfig {
    pub fn remote_url(&self) -> Option<String> {
        let repo = self.repository.as_deref()?;
        Some(format!(
            "{}/{}.git",
            self.remote_base.trim_end_matches('/'),
            repo
        ))
    }
}

impl AppConfig {
    /// Load from `CONFIG_FILE`, or `config.toml` in the working directory.
    /// Without `CONFIG_FILE` a missing `config.toml` yields the defaults.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_path(Path::new(&path)),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
            }
            Err(_) => {
                tracing::info!("no config file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let s = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::load_from_str(&s).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.output.path.as_os_str().is_empty(),
            "output.path must be non-empty"
        );
        anyhow::ensure!(
            self.collector.command_timeout_secs > 0,
            "collector.command_timeout_secs must be > 0, got {}",
            self.collector.command_timeout_secs
        );
        for (i, svc) in self.services.iter().enumerate() {
            anyhow::ensure!(
                !svc.name.trim().is_empty(),
                "services[{}].name must be non-empty",
                i
            );
            anyhow::ensure!(
                !(svc.container.is_some() && svc.service.is_some()),
                "services[{}] ({}) must set either container or service, not both",
                i,
                svc.name
            );
        }
        if self.publish.repository.is_some() {
            anyhow::ensure!(
                !self.publish.branch.is_empty(),
                "publish.branch must be non-empty when publish.repository is set"
            );
            anyhow::ensure!(
                !self.publish.file_name.is_empty(),
                "publish.file_name must be non-empty when publish.repository is set"
            );
        }
        Ok(())
    }
}
