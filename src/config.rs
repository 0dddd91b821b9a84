use serde::Deserialize;
use std::path::PathBuf;
use config::{Config, ConfigError};
use tracing::debug;

pub const DEFAULT_STORAGE_KEY: &str = "streetFoodVendors";
pub const DEFAULT_STORAGE_DIR: &str = "data";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub storage: StorageConfig,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storage slot.
    pub dir: PathBuf,
    /// Name of the slot the vendor collection lives in.
    pub key: String,
}

impl Settings {
    /// Defaults, then `config/default.*` if present, then `APP_*` environment
    /// variables (`APP_STORAGE__DIR`, `APP_LOG_LEVEL`, ...).
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("storage.dir", DEFAULT_STORAGE_DIR)?
            .set_default("storage.key", DEFAULT_STORAGE_KEY)?
            .set_default("log_level", "info")?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;

        debug!(
            storage_dir = ?settings.storage.dir,
            storage_key = %settings.storage.key,
            "Loaded settings"
        );

        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                dir: PathBuf::from(DEFAULT_STORAGE_DIR),
                key: DEFAULT_STORAGE_KEY.to_string(),
            },
            log_level: "info".to_string(),
        }
    }
}
