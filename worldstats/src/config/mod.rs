//! Configuration file management
//!
//! Settings live in an INI file at `~/.config/worldstats/config.ini` (the
//! platform config directory). A missing file means defaults; CLI flags
//! override file values.
//!
//! ```ini
//! [provider]
//! base_url = https://restcountries.com/v3.1
//! timeout_secs = 30
//!
//! [report]
//! metric = area-descending
//! limit = 10
//! continents =
//!
//! [logging]
//! level = info
//! directory =
//! ```

mod file;
mod keys;

pub use file::{
    config_dir, config_file_path, ConfigError, ConfigFile, ProviderSettings, ReportSettings,
};
pub use keys::ConfigKey;
