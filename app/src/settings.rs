use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use infrastructure::{HttpServerConfig, MonitoringConfig};
use serde::Deserialize;

use crate::adapter::{AdvisorSettings, JsonFileStore};

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub http_server: HttpServerConfig,
    pub monitoring: MonitoringConfig,
    pub household: HouseholdSettings,
    pub advisor: AdvisorSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config.toml"))
            .add_source(Environment::default().separator("_").list_separator(","));

        let s = builder.build()?;
        s.try_deserialize()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HouseholdSettings {
    pub snapshot_file: PathBuf,
}

impl HouseholdSettings {
    pub fn new_store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.snapshot_file)
    }
}
