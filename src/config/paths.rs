//! Path management for the finance dashboard
//!
//! ## Path Resolution Order
//!
//! 1. `FINDASH_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/findash` or `~/.config/findash`
//! 3. Windows: `%APPDATA%\findash`

use std::path::{Path, PathBuf};

use crate::error::DashboardError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "FINDASH_CONFIG_DIR";

const APP_DIR_NAME: &str = "findash";

/// Resolves the files the dashboard keeps on disk
#[derive(Debug, Clone)]
pub struct DashboardPaths {
    base_dir: PathBuf,
}

impl DashboardPaths {
    /// Resolve the configuration directory for this platform
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory is set.
    pub fn new() -> Result<Self, DashboardError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Create the configuration directory if needed
    pub fn ensure_directories(&self) -> Result<(), DashboardError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            DashboardError::Io(format!("Failed to create config directory: {}", e))
        })
    }

    /// Check if `findash init` has written a settings file
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, DashboardError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                DashboardError::Config("Could not determine home directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join(APP_DIR_NAME))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, DashboardError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| DashboardError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}
