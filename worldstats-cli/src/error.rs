//! CLI error type.

use thiserror::Error;
use worldstats::config::ConfigError;
use worldstats::country::UnknownContinent;
use worldstats::logging::LoggingError;
use worldstats::provider::ProviderError;
use worldstats::report::ReportError;

/// Errors surfaced to the user by `main`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid combination of arguments or configuration.
    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    ConfigFile(#[from] ConfigError),

    #[error("Failed to fetch country data: {0}")]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Continent(#[from] UnknownContinent),

    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] LoggingError),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
