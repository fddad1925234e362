//! User settings for the finance dashboard
//!
//! Display preferences only. Settings never hold transactions or budgets.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::DashboardPaths;
use crate::engine::{DashboardOptions, DEFAULT_RECENT_LIMIT, DEFAULT_TOP_LIMIT};
use crate::error::DashboardError;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of categories listed as top spending
    #[serde(default = "default_top_limit")]
    pub top_category_limit: usize,

    /// Number of transactions listed as recent
    #[serde(default = "default_recent_limit")]
    pub recent_transaction_limit: usize,

    /// Data file used when `--data` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_data_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_top_limit() -> usize {
    DEFAULT_TOP_LIMIT
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            top_category_limit: default_top_limit(),
            recent_transaction_limit: default_recent_limit(),
            default_data_file: None,
        }
    }
}

impl Settings {
    /// List sizes for the composed dashboard
    pub fn dashboard_options(&self) -> DashboardOptions {
        DashboardOptions {
            top_limit: self.top_category_limit,
            recent_limit: self.recent_transaction_limit,
        }
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &DashboardPaths) -> Result<Self, DashboardError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - `findash init` decides when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| DashboardError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| DashboardError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DashboardPaths) -> Result<(), DashboardError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| DashboardError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
