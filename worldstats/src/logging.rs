//! Logging setup
//!
//! Installs a `tracing` subscriber for the binary. Library code only uses the
//! `tracing` macros; nothing is printed unless a subscriber is installed.
//!
//! Filter precedence: `RUST_LOG` if set, otherwise `debug` when verbose,
//! otherwise the configured level.

use std::path::PathBuf;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Keeps the non-blocking file writer alive; flushes on drop.
pub use tracing_appender::non_blocking::WorkerGuard as LogGuard;

/// File name prefix for daily log files.
pub const LOG_FILE_PREFIX: &str = "worldstats.log";

/// Logging configuration from the `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub level: Level,
    /// Write daily-rolling log files here instead of stderr.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            directory: None,
        }
    }
}

impl LoggingSettings {
    /// Effective filter directive, before `RUST_LOG` is consulted.
    pub fn directive(&self, verbose: bool) -> String {
        let level = if verbose { Level::DEBUG } else { self.level };
        level.to_string().to_lowercase()
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// Install the global subscriber.
///
/// Returns a guard when logging to files; keep it alive until exit.
pub fn init_logging(
    settings: &LoggingSettings,
    verbose: bool,
) -> Result<Option<LogGuard>, LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.directive(verbose)));

    match &settings.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
                path: dir.clone(),
                source,
            })?;

            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| LoggingError::Install(e.to_string()))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| LoggingError::Install(e.to_string()))?;
            Ok(None)
        }
    }
}
