//! CLI command handlers
//!
//! This module bridges the clap argument parsing with the session store,
//! the engine and the renderers.

pub mod export;
pub mod report;
pub mod transaction;

pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::config::Settings;
use crate::display::DisplayStyle;
use crate::engine::DashboardOptions;
use crate::error::{DashboardError, DashboardResult};
use crate::models::MonthPeriod;
use crate::session::{Dataset, SessionStore};

/// Everything a command needs: the loaded session, the settings and "now"
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub store: SessionStore,
    pub settings: Settings,
    pub period: MonthPeriod,
}

impl CommandContext {
    pub fn new(store: SessionStore, settings: Settings, period: MonthPeriod) -> Self {
        Self {
            store,
            settings,
            period,
        }
    }

    pub fn style(&self) -> DisplayStyle {
        DisplayStyle::from_settings(&self.settings)
    }

    pub fn options(&self) -> DashboardOptions {
        self.settings.dashboard_options()
    }
}

/// Build the session from the data file and any `Category=Amount` overrides
///
/// `data` wins over the settings' default data file. Without either the
/// session starts empty. Non-empty `budget_overrides` replace the file's
/// budgets wholesale.
pub fn load_session(
    data: Option<&Path>,
    settings: &Settings,
    budget_overrides: &[String],
) -> DashboardResult<SessionStore> {
    let data = data.or(settings.default_data_file.as_deref());

    let mut store = match data {
        Some(path) => SessionStore::from_dataset(Dataset::load(path)?)?,
        None => {
            info!("no data file given; starting with an empty session");
            SessionStore::new()
        }
    };

    if !budget_overrides.is_empty() {
        store.replace_budgets_from_assignments(budget_overrides)?;
    }

    Ok(store)
}

/// Resolve the reference month from `--now`, defaulting to the local date
pub fn resolve_period(now: Option<&str>) -> DashboardResult<MonthPeriod> {
    match now {
        Some(s) => MonthPeriod::parse(s).map_err(|e| {
            DashboardError::Validation(format!(
                "{}. Use YYYY-MM or YYYY-MM-DD (e.g., 2025-01)",
                e
            ))
        }),
        None => Ok(MonthPeriod::current()),
    }
}

/// Run `write` against the output file, or stdout when no file is given
pub(crate) fn write_output<F>(output: Option<&Path>, write: F) -> DashboardResult<()>
where
    F: FnOnce(&mut dyn Write) -> DashboardResult<()>,
{
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                DashboardError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer.flush()?;
            println!("Exported to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            write(&mut lock)?;
            lock.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DATA: &str = r#"{
        "transactions": [
            {"amount": 20, "date": "2025-01-03", "description": "Pharmacy", "category": "Healthcare"}
        ],
        "budgets": [{"category": "Healthcare", "amount": 50}]
    }"#;

    #[test]
    fn test_load_session_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        std::fs::write(&path, DATA).unwrap();

        let store = load_session(Some(path.as_path()), &Settings::default(), &[]).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.budget_for("Healthcare").cents(), 5000);
    }

    #[test]
    fn test_settings_default_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        std::fs::write(&path, DATA).unwrap();

        let mut settings = Settings::default();
        settings.default_data_file = Some(path);
        let store = load_session(None, &settings, &[]).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_budget_overrides_replace_file_budgets() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        std::fs::write(&path, DATA).unwrap();

        let overrides = vec!["Travel=300".to_string()];
        let store = load_session(Some(path.as_path()), &Settings::default(), &overrides).unwrap();
        assert_eq!(store.budget_for("Healthcare").cents(), 0);
        assert_eq!(store.budget_for("Travel").cents(), 30000);
    }

    #[test]
    fn test_no_data_gives_empty_session() {
        let store = load_session(None, &Settings::default(), &[]).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_resolve_period() {
        assert_eq!(
            resolve_period(Some("2025-02-14")).unwrap(),
            MonthPeriod::new(2025, 2).unwrap()
        );
        let err = resolve_period(Some("Feb")).unwrap_err();
        assert!(err.is_validation());
        assert!(resolve_period(None).is_ok());
    }
}
