//! INI-backed configuration file.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use super::ConfigKey;
use crate::country::ContinentFilter;
use crate::logging::LoggingSettings;
use crate::provider::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::report::{Metric, ReportSpec, ResultLimit};

const APP_DIR: &str = "worldstats";
const CONFIG_FILE: &str = "config.ini";

/// Errors reading, validating or writing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(String),

    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("unknown configuration key '{0}'")]
    UnknownKey(String),
}

/// Directory holding the configuration file.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Full path of the configuration file.
pub fn config_file_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// `[provider]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// `[report]` section: defaults for the `report` command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportSettings {
    pub metric: Metric,
    pub limit: ResultLimit,
    pub continents: ContinentFilter,
}

impl ReportSettings {
    pub fn to_spec(&self) -> ReportSpec {
        ReportSpec::new(self.metric)
            .with_filter(self.continents.clone())
            .with_limit(self.limit)
    }
}

/// The whole configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigFile {
    pub provider: ProviderSettings,
    pub report: ReportSettings,
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// Load from the default location, or defaults if the file is missing.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load from `path`, or defaults if the file is missing.
    ///
    /// Every present key is validated; keys this version does not know are
    /// ignored with a warning.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|e| match e {
            ini::Error::Io(io) => ConfigError::Io(io),
            other => ConfigError::Parse(other.to_string()),
        })?;

        let mut config = Self::default();
        for (section, properties) in ini.iter() {
            let section = section.unwrap_or_default();
            for (key, value) in properties.iter() {
                let name = format!("{}.{}", section, key);
                match name.parse::<ConfigKey>() {
                    Ok(config_key) => config_key.set(&mut config, value)?,
                    Err(_) => tracing::warn!(key = %name, "Ignoring unknown config key"),
                }
            }
        }

        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Save to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save to `path`, creating parent directories if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut ini = Ini::new();
        for key in ConfigKey::all() {
            ini.with_section(Some(key.section()))
                .set(key.key_name(), key.get(self));
        }
        ini.write_to_file(path)?;

        tracing::debug!(path = %path.display(), "Saved config file");
        Ok(())
    }
}
