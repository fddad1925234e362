//! CSV Export functionality
//!
//! Spreadsheet-friendly exports of transactions, the monthly series and the
//! budget comparison. Amounts are written as plain decimals.

use std::io::Write;

use csv::Writer;

use crate::engine::{BudgetComparisonRow, MonthlyTotal};
use crate::error::{DashboardError, DashboardResult};
use crate::models::{Money, Transaction};

fn export_err(e: impl std::fmt::Display) -> DashboardError {
    DashboardError::Export(e.to_string())
}

fn decimal(amount: Money) -> String {
    amount.format_with_symbol("")
}

/// Export transactions to CSV, in the order given
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> DashboardResult<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(["ID", "Date", "Description", "Category", "Amount"])
        .map_err(export_err)?;

    for txn in transactions {
        csv.write_record([
            txn.id.to_string(),
            txn.date.format("%Y-%m-%dT%H:%M:%S").to_string(),
            txn.description.clone(),
            txn.category.clone(),
            decimal(txn.amount),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

/// Export the monthly spending series to CSV
pub fn export_monthly_series_csv<W: Write>(
    series: &[MonthlyTotal],
    writer: W,
) -> DashboardResult<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(["Period", "Label", "Amount"])
        .map_err(export_err)?;

    for month in series {
        csv.write_record([
            month.period.to_string(),
            month.label.clone(),
            decimal(month.amount),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

/// Export the budget-vs-actual comparison to CSV
pub fn export_budget_comparison_csv<W: Write>(
    rows: &[BudgetComparisonRow],
    writer: W,
) -> DashboardResult<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(["Category", "Budget", "Actual", "Remaining", "Percent Used"])
        .map_err(export_err)?;

    for row in rows {
        csv.write_record([
            row.category.clone(),
            decimal(row.budget),
            decimal(row.actual),
            decimal(row.remaining()),
            format!("{:.1}", row.percent_used()),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}
