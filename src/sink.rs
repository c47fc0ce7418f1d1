// Snapshot file output: pretty JSON, parent directories created, previous file overwritten.

use anyhow::Context;
use std::path::Path;

use crate::models::Snapshot;

pub async fn write_snapshot(path: &Path, snapshot: &Snapshot) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), operation = "write_snapshot", "snapshot written");
    Ok(())
}
