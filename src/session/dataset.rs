//! Loading transactions and budgets from a data file
//!
//! JSON and YAML files hold a `{ transactions, budgets }` document; CSV files
//! hold transactions only and go through [`CsvImporter`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use super::import::CsvImporter;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{Budget, Transaction};

/// Supported data file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
    Csv,
}

impl DataFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> DashboardResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            _ => Err(DashboardError::Import(format!(
                "Unsupported data file '{}': expected .json, .yaml, .yml or .csv",
                path.display()
            ))),
        }
    }
}

/// Raw contents of a data file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl Dataset {
    pub fn load(path: &Path) -> DashboardResult<Self> {
        let format = DataFormat::from_path(path)?;

        let dataset = match format {
            DataFormat::Csv => {
                let result = CsvImporter::new().import_file(path)?;
                if result.has_errors() {
                    warn!(
                        skipped = result.errors.len(),
                        file = %path.display(),
                        "some CSV rows could not be imported"
                    );
                }
                if result.skipped_inflows > 0 {
                    info!(
                        deposits = result.skipped_inflows,
                        file = %path.display(),
                        "left deposits out of signed CSV export"
                    );
                }
                Self {
                    transactions: result.transactions,
                    budgets: Vec::new(),
                }
            }
            DataFormat::Json | DataFormat::Yaml => {
                let contents = std::fs::read_to_string(path).map_err(|e| {
                    DashboardError::Io(format!("Failed to read {}: {}", path.display(), e))
                })?;
                if format == DataFormat::Json {
                    Self::from_json_str(&contents)?
                } else {
                    Self::from_yaml_str(&contents)?
                }
            }
        };

        info!(
            transactions = dataset.transactions.len(),
            budgets = dataset.budgets.len(),
            file = %path.display(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    pub fn from_json_str(contents: &str) -> DashboardResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_yaml_str(contents: &str) -> DashboardResult<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }
}
