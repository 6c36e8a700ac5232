use super::app_config::AppConfig;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Finds `config.toml`, writes the defaults on first run and reads it back.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Uses the platform configuration directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirNotFound` when no home directory is known.
    pub fn new() -> Result<Self, ConfigError> {
        AppConfig::default_config_dir()
            .map(Self::with_dir)
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    #[must_use]
    pub const fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Path of the file `load_config` reads.
    #[must_use]
    pub fn config_path(&self, path_override: Option<&Path>) -> PathBuf {
        path_override.map_or_else(|| self.config_dir.join(CONFIG_FILE_NAME), Path::to_path_buf)
    }

    /// Loads the configuration, creating the file with defaults when missing.
    /// A malformed file is left as is and the defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let config_path = self.config_path(path_override);

        if !config_path.exists() {
            info!(path = %config_path.display(), "Writing default configuration");
            let config = AppConfig::default();
            Self::write_atomically(&config_path, &toml::to_string_pretty(&config)?)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&config_path)?;
        let config = match toml::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %config_path.display(), error = %e, "Invalid configuration, using defaults");
                return Ok(AppConfig::default());
            }
        };
        Ok(Self::sanitize(config))
    }

    /// Replaces values that would make the app unusable with their defaults.
    fn sanitize(mut config: AppConfig) -> AppConfig {
        let defaults = AppConfig::default();
        if config.dataset_url.trim().is_empty() {
            warn!("Empty dataset_url in configuration, using default");
            config.dataset_url = defaults.dataset_url;
        }
        if config.request_timeout_secs == 0 {
            warn!("request_timeout_secs must be positive, using default");
            config.request_timeout_secs = defaults.request_timeout_secs;
        }
        if config.contact_email.trim().is_empty() {
            config.contact_email = defaults.contact_email;
        }
        config
    }

    fn write_atomically(path: &Path, content: &str) -> Result<(), ConfigError> {
        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("config path has no parent directory"))?;
        fs::create_dir_all(parent)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
