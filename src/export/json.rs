//! JSON Export functionality
//!
//! Exports the session data together with the derived dashboard, with schema
//! versioning so a file can be checked before it is read back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::Write;

use crate::engine::{Dashboard, DashboardOptions};
use crate::error::{DashboardError, DashboardResult};
use crate::models::{Budget, MonthPeriod, Transaction};
use crate::session::SessionStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of the session and its dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Reference month of the derived views
    pub period: MonthPeriod,

    pub transactions: Vec<Transaction>,

    pub budgets: Vec<Budget>,

    /// Every derived view for `period`
    pub dashboard: Dashboard,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,

    pub budget_count: usize,

    /// Number of distinct categories used by transactions
    pub category_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl DashboardExport {
    pub fn from_session(
        store: &SessionStore,
        period: MonthPeriod,
        options: DashboardOptions,
    ) -> Self {
        let transactions = store.transactions().to_vec();
        let budgets = store.budgets().to_vec();

        let category_count = transactions
            .iter()
            .map(|t| t.category.as_str())
            .collect::<BTreeSet<_>>()
            .len();

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            budget_count: budgets.len(),
            category_count,
            earliest_transaction: transactions.iter().map(|t| t.date).min().map(|d| d.to_string()),
            latest_transaction: transactions.iter().map(|t| t.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            period,
            dashboard: store.dashboard(period, options),
            transactions,
            budgets,
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.metadata.transaction_count != self.transactions.len() {
            return Err(format!(
                "Metadata lists {} transactions but the export holds {}",
                self.metadata.transaction_count,
                self.transactions.len()
            ));
        }

        if self.metadata.budget_count != self.budgets.len() {
            return Err(format!(
                "Metadata lists {} budgets but the export holds {}",
                self.metadata.budget_count,
                self.budgets.len()
            ));
        }

        if self.dashboard.period != self.period {
            return Err(format!(
                "Dashboard period {} does not match export period {}",
                self.dashboard.period, self.period
            ));
        }

        Ok(())
    }
}

/// Write an export as JSON
pub fn export_dashboard_json<W: Write>(
    export: &DashboardExport,
    writer: &mut W,
    pretty: bool,
) -> DashboardResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| DashboardError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export (for verification)
pub fn import_from_json(json_str: &str) -> DashboardResult<DashboardExport> {
    let export: DashboardExport =
        serde_json::from_str(json_str).map_err(|e| DashboardError::Import(e.to_string()))?;

    export.validate().map_err(DashboardError::Import)?;

    Ok(export)
}
