use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::household::{Household, HouseholdStore, StoreError};

/// Household snapshot kept as a single JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write(&self, household: &Household) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(household).context("Error serializing household")?;

        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("Error creating directory {}", dir.display()))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .with_context(|| format!("Error writing {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("Error replacing {}", self.path.display()))?;

        Ok(())
    }
}

impl HouseholdStore for JsonFileStore {
    async fn load(&self) -> anyhow::Result<Option<Household>> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("Error reading {}", self.path.display())),
        };

        let household = Household::from_snapshot(&json)
            .with_context(|| format!("Error parsing household snapshot {}", self.path.display()))?;

        Ok(Some(household))
    }

    async fn save(&self, household: &Household) -> Result<(), StoreError> {
        self.write(household).await.map_err(StoreError::PersistFailed)?;

        tracing::debug!("Saved household snapshot to {}", self.path.display());
        Ok(())
    }
}
