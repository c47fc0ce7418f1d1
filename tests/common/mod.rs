// Shared test helpers: fake probes and a scripted command runner

#![allow(dead_code)]

use homelab_stats::collectors::Probes;
use homelab_stats::config::AppConfig;
use homelab_stats::executor::{CommandError, CommandRunner};
use homelab_stats::repos::{
    BanTool, ContainerFilter, ContainerRuntime, HostProbe, PathUsage, QueryError, ServiceManager,
};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// What the fake host reports for one path.
#[derive(Debug, Clone, Copy)]
pub enum FakeDisk {
    Usage(u64, u64),
    ShortLine,
    Unparseable,
}

#[derive(Debug, Default)]
pub struct FakeHost {
    pub uptime: Option<f64>,
    pub disks: Vec<(PathBuf, FakeDisk)>,
    pub queried: RefCell<Vec<PathBuf>>,
}

impl HostProbe for FakeHost {
    async fn uptime_seconds(&self) -> Option<f64> {
        self.uptime
    }

    fn path_exists(&self, path: &Path) -> bool {
        self.disks.iter().any(|(p, _)| p == path)
    }

    async fn disk_usage(&self, path: &Path) -> Result<Option<PathUsage>, QueryError> {
        self.queried.borrow_mut().push(path.to_path_buf());
        match self.disks.iter().find(|(p, _)| p == path).map(|(_, d)| *d) {
            Some(FakeDisk::Usage(total_bytes, used_bytes)) => Ok(Some(PathUsage {
                total_bytes,
                used_bytes,
            })),
            Some(FakeDisk::Unparseable) => Err(QueryError::Parse {
                what: "df size",
                value: "garbage".into(),
            }),
            Some(FakeDisk::ShortLine) | None => Ok(None),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FakeBans {
    pub total: Option<u64>,
    pub recent: Option<u64>,
    pub active: Option<u64>,
}

impl BanTool for FakeBans {
    async fn total_banned(&self) -> Option<u64> {
        self.total
    }

    async fn ban_log_matches(&self, _log: &Path) -> Option<u64> {
        self.recent
    }

    async fn active_bans(&self) -> Option<u64> {
        self.active
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeContainer {
    pub running: bool,
    pub started_at: Option<String>,
    pub health: String,
}

#[derive(Debug, Default)]
pub struct FakeRuntime {
    pub counts: HashMap<ContainerFilter, u64>,
    pub containers: HashMap<String, FakeContainer>,
    /// Containers whose queries fail outright.
    pub failing: HashSet<String>,
}

impl FakeRuntime {
    fn lookup(&self, name: &str) -> Result<Option<&FakeContainer>, QueryError> {
        if self.failing.contains(name) {
            return Err(QueryError::Failed {
                tool: "docker",
                message: format!("cannot reach daemon for {name}"),
            });
        }
        Ok(self.containers.get(name))
    }
}

impl ContainerRuntime for FakeRuntime {
    async fn count(&self, filter: ContainerFilter) -> Option<u64> {
        self.counts.get(&filter).copied()
    }

    async fn is_running(&self, name: &str) -> Result<bool, QueryError> {
        Ok(self.lookup(name)?.is_some_and(|c| c.running))
    }

    async fn started_at(&self, name: &str) -> Result<Option<String>, QueryError> {
        Ok(self.lookup(name)?.and_then(|c| c.started_at.clone()))
    }

    async fn health_status(&self, name: &str) -> Result<String, QueryError> {
        Ok(self.lookup(name)?.map(|c| c.health.clone()).unwrap_or_default())
    }
}

#[derive(Debug, Default)]
pub struct FakeSystemd {
    /// unit -> ActiveEnterTimestamp value; presence means active.
    pub active: HashMap<String, Option<String>>,
    pub failing: HashSet<String>,
}

impl ServiceManager for FakeSystemd {
    async fn is_active(&self, unit: &str) -> Result<bool, QueryError> {
        if self.failing.contains(unit) {
            return Err(QueryError::Failed {
                tool: "systemctl",
                message: "bus unavailable".into(),
            });
        }
        Ok(self.active.contains_key(unit))
    }

    async fn active_since(&self, unit: &str) -> Result<Option<String>, QueryError> {
        Ok(self.active.get(unit).cloned().flatten())
    }
}

pub type FakeProbes = Probes<FakeHost, FakeBans, FakeRuntime, FakeSystemd>;

/// Every external tool missing or silent.
pub fn unavailable_probes() -> FakeProbes {
    Probes {
        host: FakeHost::default(),
        bans: FakeBans::default(),
        containers: FakeRuntime::default(),
        services: FakeSystemd::default(),
    }
}

/// Runner answering from a table keyed by the full command line; unknown commands fail
/// with a non-zero exit.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    pub responses: HashMap<String, String>,
    pub calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn with(mut self, command_line: &str, stdout: &str) -> Self {
        self.responses
            .insert(command_line.to_string(), stdout.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    async fn try_run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.borrow_mut().push(line.clone());
        self.responses
            .get(&line)
            .map(|out| out.trim().to_string())
            .ok_or(CommandError::Status {
                program: program.to_string(),
                code: Some(1),
                stderr: format!("unscripted: {line}"),
            })
    }
}

/// Config with output under `dir` and no publishing.
pub fn test_config(dir: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.output.path = dir.join("nested/www/homelab-stats.json");
    config.security.fail2ban_log = dir.join("fail2ban.log");
    config.storage.paths = vec![PathBuf::from("/mnt/data"), PathBuf::from("/mnt/media")];
    config
}
