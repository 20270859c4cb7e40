//! Configuration management for the rekap application.
//!
//! Settings are stored as pretty-printed JSON in the platform-specific data
//! directory resolved by [`DataStorage`]:
//!
//! - **Windows**: `%LOCALAPPDATA%\rekap\rekap\config.json`
//! - **macOS**: `~/Library/Application Support/rekap/rekap/config.json`
//! - **Linux**: `~/.local/share/rekap/rekap/config.json`
//!
//! A missing file is not an error: [`Config::read`] falls back to defaults.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use rekap::libs::config::Config;
//!
//! let config = Config::read()?;
//! let report = config.report();
//! println!("Default period: {}", report.default_period);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::duration::DEFAULT_SEPARATOR;
use crate::libs::period::PeriodKind;
use crate::libs::record::Attendance;
use crate::libs::summary::DuplicatePolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

/// Defaults applied by the recap screens.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Period used when `--period` is not given.
    #[serde(default)]
    pub default_period: PeriodKind,

    /// Attendance category counted toward the percentage column.
    #[serde(default)]
    pub positive_category: Attendance,

    /// How duplicated records for the same student and day are counted.
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,

    /// Separator placed between rendered duration units.
    #[serde(default = "default_separator")]
    pub unit_separator: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            default_period: PeriodKind::Monthly,
            positive_category: Attendance::Present,
            duplicate_policy: DuplicatePolicy::CountEach,
            unit_separator: default_separator(),
        }
    }
}

/// Main configuration container.
///
/// Sections are optional so that a partially written file stays valid and
/// unconfigured sections are omitted from the JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

impl Config {
    /// Reads configuration from the data directory, or returns the default
    /// configuration when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            tracing::debug!(path = %config_file_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| format!("parsing {}", config_file_path.display()))?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON, overwriting any
    /// existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(&config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        tracing::info!(path = %config_file_path.display(), "configuration saved");
        Ok(())
    }

    /// The effective report settings, defaults filled in.
    pub fn report(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }
}
