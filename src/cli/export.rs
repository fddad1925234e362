//! CLI commands for data export

use clap::Subcommand;
use std::io::Write;
use std::path::PathBuf;

use super::{write_output, CommandContext};
use crate::error::DashboardResult;
use crate::export::{
    export_budget_comparison_csv, export_dashboard_json, export_dashboard_yaml,
    export_monthly_series_csv, export_transactions_csv, DashboardExport,
};

/// Export subcommands
///
/// Without `--output` the export is written to stdout.
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Data and every derived view as JSON
    Json {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Data and every derived view as YAML
    Yaml {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// All transactions as CSV
    TransactionsCsv {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Monthly spending series as CSV
    SeriesCsv {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Budget comparison for the reference month as CSV
    BudgetsCsv {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(ctx: &CommandContext, cmd: ExportCommands) -> DashboardResult<()> {
    match cmd {
        ExportCommands::Json { output, pretty } => {
            let export = DashboardExport::from_session(&ctx.store, ctx.period, ctx.options());
            write_output(output.as_deref(), |mut w| {
                export_dashboard_json(&export, &mut w, pretty)?;
                w.write_all(b"\n")?;
                Ok(())
            })
        }
        ExportCommands::Yaml { output } => {
            let export = DashboardExport::from_session(&ctx.store, ctx.period, ctx.options());
            write_output(output.as_deref(), |mut w| {
                export_dashboard_yaml(&export, &mut w)
            })
        }
        ExportCommands::TransactionsCsv { output } => {
            write_output(output.as_deref(), |w| {
                export_transactions_csv(ctx.store.transactions(), w)
            })
        }
        ExportCommands::SeriesCsv { output } => {
            let dashboard = ctx.store.dashboard(ctx.period, ctx.options());
            write_output(output.as_deref(), |w| {
                export_monthly_series_csv(&dashboard.monthly_series, w)
            })
        }
        ExportCommands::BudgetsCsv { output } => {
            let dashboard = ctx.store.dashboard(ctx.period, ctx.options());
            write_output(output.as_deref(), |w| {
                export_budget_comparison_csv(&dashboard.budget_comparison, w)
            })
        }
    }
}
