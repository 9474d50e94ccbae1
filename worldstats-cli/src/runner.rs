//! Shared command setup: configuration, logging and the data provider.

use worldstats::config::ConfigFile;
use worldstats::logging::{init_logging, LogGuard};
use worldstats::provider::{ReqwestClient, RestCountriesProvider};

use crate::error::CliError;

/// Loads configuration and installs logging for a command run.
///
/// Keep the runner alive for the whole command so file logs are flushed.
pub struct CliRunner {
    config: ConfigFile,
    _log_guard: Option<LogGuard>,
}

impl CliRunner {
    pub fn new(verbose: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;
        let log_guard = init_logging(&config.logging, verbose)?;
        Ok(Self {
            config,
            _log_guard: log_guard,
        })
    }

    pub fn log_startup(&self, command: &str) {
        tracing::info!(
            command = command,
            version = env!("CARGO_PKG_VERSION"),
            base_url = %self.config.provider.base_url,
            "WorldStats starting"
        );
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Blocking provider built from the `[provider]` settings.
    pub fn provider(&self) -> Result<RestCountriesProvider<ReqwestClient>, CliError> {
        let settings = &self.config.provider;
        let client = ReqwestClient::with_timeout(settings.timeout_secs)?;
        Ok(RestCountriesProvider::with_base_url(
            client,
            settings.base_url.clone(),
        ))
    }
}
