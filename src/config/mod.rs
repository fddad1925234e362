//! Configuration module for the finance dashboard
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Display preferences and the default data file

pub mod paths;
pub mod settings;

pub use paths::DashboardPaths;
pub use settings::Settings;
