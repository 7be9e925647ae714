//! Configuration management for Firesafe server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::export::SpreadsheetFormat;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

/// Inspection scheduling policy
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct InspectionConfig {
    /// Lookahead window (days) in which an inspection counts as pending
    pub due_soon_days: i64,
    /// Number of calendar months covered by the dashboard trend series
    pub trend_months: u32,
}

/// Spreadsheet export defaults
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used when a request does not name one
    pub format: SpreadsheetFormat,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SeedConfig {
    /// Load the demonstration fixture set at start-up
    pub enabled: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub inspection: InspectionConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // FIRESAFE_INSPECTION__DUE_SOON_DAYS=14 etc.
            .add_source(
                Environment::with_prefix("FIRESAFE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for InspectionConfig {
    fn default() -> Self {
        Self {
            due_soon_days: 7,
            trend_months: 6,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
