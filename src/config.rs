//! Configuration management for MedTrack server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

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
    /// "pretty" or "json"
    pub format: String,
}

/// Fixture files for the catalog and usage history. When either is
/// missing the built-in seed data is served.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DataConfig {
    pub equipment_path: Option<String>,
    pub usage_path: Option<String>,
}

impl DataConfig {
    /// Whether both fixture files are configured
    pub fn uses_fixture_files(&self) -> bool {
        self.equipment_path.is_some() && self.usage_path.is_some()
    }

    /// Name of the data source this configuration selects
    pub fn source_name(&self) -> &'static str {
        if self.uses_fixture_files() {
            "json-file"
        } else {
            "seed"
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct VerificationConfig {
    /// Delay before a re-verification completes, in milliseconds
    pub delay_ms: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub verification: VerificationConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. MEDTRACK_SERVER__PORT)
            .add_source(
                Environment::with_prefix("MEDTRACK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
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

impl Default for VerificationConfig {
    fn default() -> Self {
        Self { delay_ms: 1500 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.verification.delay_ms, 1500);
        assert!(config.data.equipment_path.is_none());
    }

    #[test]
    fn test_partial_sections_fall_back_to_defaults() {
        let config: AppConfig = Config::builder()
            .set_override("data.equipment_path", "equipment.json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.data.equipment_path.as_deref(), Some("equipment.json"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_single_key_keeps_section_defaults() {
        let config: AppConfig = Config::builder()
            .set_override("server.port", 9000)
            .unwrap()
            .set_override("logging.format", "json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.verification.delay_ms, 1500);
    }

    #[test]
    fn test_source_name() {
        let mut data = DataConfig::default();
        assert_eq!(data.source_name(), "seed");
        data.equipment_path = Some("equipment.json".into());
        assert_eq!(data.source_name(), "seed");
        data.usage_path = Some("usage.json".into());
        assert!(data.uses_fixture_files());
        assert_eq!(data.source_name(), "json-file");
    }
}
