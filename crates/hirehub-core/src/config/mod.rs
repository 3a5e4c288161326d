//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::logging::LoggingConfig;
use self::storage::StorageConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Resume upload storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Demo data settings.
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Demo/sample data configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Whether to seed the store with sample job listings at startup.
    #[serde(default = "default_true")]
    pub seed_sample_jobs: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed_sample_jobs: default_true(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `HIREHUB__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("HIREHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_complete() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.storage.max_upload_size_bytes, 5 * 1024 * 1024);
        assert!(config.demo.seed_sample_jobs);
        assert!(config.server.cors.allowed_origins.contains(&"*".to_string()));
    }
}
