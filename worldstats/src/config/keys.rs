//! Addressable configuration keys for `config get/set/list`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::Level;

use super::{ConfigError, ConfigFile};
use crate::country::ContinentFilter;
use crate::report::{Metric, ResultLimit};

/// A `section.key` setting in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    ProviderBaseUrl,
    ProviderTimeoutSecs,
    ReportMetric,
    ReportLimit,
    ReportContinents,
    LoggingLevel,
    LoggingDirectory,
}

impl ConfigKey {
    /// Every key, grouped by section in file order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::ProviderBaseUrl,
            ConfigKey::ProviderTimeoutSecs,
            ConfigKey::ReportMetric,
            ConfigKey::ReportLimit,
            ConfigKey::ReportContinents,
            ConfigKey::LoggingLevel,
            ConfigKey::LoggingDirectory,
        ]
    }

    /// Full dotted name, e.g. `provider.base_url`.
    pub fn name(&self) -> String {
        format!("{}.{}", self.section(), self.key_name())
    }

    pub fn section(&self) -> &'static str {
        match self {
            ConfigKey::ProviderBaseUrl | ConfigKey::ProviderTimeoutSecs => "provider",
            ConfigKey::ReportMetric | ConfigKey::ReportLimit | ConfigKey::ReportContinents => {
                "report"
            }
            ConfigKey::LoggingLevel | ConfigKey::LoggingDirectory => "logging",
        }
    }

    pub fn key_name(&self) -> &'static str {
        match self {
            ConfigKey::ProviderBaseUrl => "base_url",
            ConfigKey::ProviderTimeoutSecs => "timeout_secs",
            ConfigKey::ReportMetric => "metric",
            ConfigKey::ReportLimit => "limit",
            ConfigKey::ReportContinents => "continents",
            ConfigKey::LoggingLevel => "level",
            ConfigKey::LoggingDirectory => "directory",
        }
    }

    /// Current value as written in the file; empty when unset.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::ProviderBaseUrl => config.provider.base_url.clone(),
            ConfigKey::ProviderTimeoutSecs => config.provider.timeout_secs.to_string(),
            ConfigKey::ReportMetric => config.report.metric.name().to_string(),
            ConfigKey::ReportLimit => config.report.limit.get().to_string(),
            ConfigKey::ReportContinents => config.report.continents.to_list_string(),
            ConfigKey::LoggingLevel => config.logging.level.to_string().to_lowercase(),
            ConfigKey::LoggingDirectory => config
                .logging
                .directory
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_default(),
        }
    }

    /// Validate `value` and store it.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: self.name(),
            value: value.to_string(),
            reason,
        };

        match self {
            ConfigKey::ProviderBaseUrl => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(invalid("must start with http:// or https://".to_string()));
                }
                config.provider.base_url = value.trim_end_matches('/').to_string();
            }
            ConfigKey::ProviderTimeoutSecs => {
                let secs: u64 = value.parse().map_err(|e| invalid(format!("{}", e)))?;
                if secs == 0 {
                    return Err(invalid("must be greater than zero".to_string()));
                }
                config.provider.timeout_secs = secs;
            }
            ConfigKey::ReportMetric => {
                config.report.metric = value
                    .parse::<Metric>()
                    .map_err(|e| invalid(e.to_string()))?;
            }
            ConfigKey::ReportLimit => {
                let limit: u32 = value.parse().map_err(|e| invalid(format!("{}", e)))?;
                config.report.limit = ResultLimit::new(limit).map_err(|e| invalid(e.to_string()))?;
            }
            ConfigKey::ReportContinents => {
                config.report.continents =
                    ContinentFilter::parse_list(value).map_err(|e| invalid(e.to_string()))?;
            }
            ConfigKey::LoggingLevel => {
                config.logging.level = value
                    .parse::<Level>()
                    .map_err(|_| invalid("expected trace, debug, info, warn or error".to_string()))?;
            }
            ConfigKey::LoggingDirectory => {
                config.logging.directory = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
        }
        Ok(())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section(), self.key_name())
    }
}
