//! Configuration management for the command line application

use crate::{Error, LogFormat, Result};
use fleet_booking_core::planner::{PlannerSettings, DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS};
use serde::{Deserialize, Serialize};
use std::path::Path;

const ENV_PREFIX: &str = "FLEET_BOOKING";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the workshop and maintenance catalogs come from
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Catalog file (TOML, JSON or YAML); the built-in sample when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannerConfig {
    pub horizon_days: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

impl From<&PlannerConfig> for PlannerSettings {
    fn from(config: &PlannerConfig) -> Self {
        PlannerSettings {
            horizon_days: config.horizon_days,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from config files and the environment
    pub fn load() -> Result<Self> {
        Self::load_layered(None)
    }

    /// Load configuration with `path` layered over the default files
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_layered(Some(path.as_ref()))
    }

    fn load_layered(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false));
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("planner.horizon_days", i64::from(DEFAULT_HORIZON_DAYS))?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "text")?
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_HORIZON_DAYS).contains(&self.planner.horizon_days) {
            return Err(Error::Configuration(format!(
                "planner.horizon_days must be between 1 and {}",
                MAX_HORIZON_DAYS
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(Error::Configuration(
                "logging.level must not be empty".to_string(),
            ));
        }
        if matches!(&self.catalog.path, Some(path) if path.trim().is_empty()) {
            return Err(Error::Configuration(
                "catalog.path must not be empty when set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn planner_settings(&self) -> PlannerSettings {
        PlannerSettings::from(&self.planner)
    }
}
