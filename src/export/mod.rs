//! Export module for the finance dashboard
//!
//! - JSON: machine-readable snapshot of the data and every derived view
//! - YAML: the same snapshot in human-readable form
//! - CSV: transactions, the monthly series and the budget comparison

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_budget_comparison_csv, export_monthly_series_csv, export_transactions_csv};
pub use json::{export_dashboard_json, import_from_json, DashboardExport, ExportMetadata, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_dashboard_yaml, import_from_yaml};
