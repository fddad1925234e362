//! CLI commands for dashboard reports

use clap::Subcommand;

use super::CommandContext;
use crate::display::{
    format_budget_comparison, format_category_breakdown, format_dashboard, format_insights,
    format_monthly_series, format_summary,
};
use crate::engine::{aggregate_by_category, filter_by_period};
use crate::error::DashboardResult;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Monthly total, budget usage, top categories and recent transactions
    Summary,

    /// Budget alerts, top spending and the month-over-month trend
    Insights,

    /// Spending per calendar month
    #[command(alias = "monthly")]
    Series,

    /// Spending per category
    Categories {
        /// Only count the reference month (default: all time)
        #[arg(short, long)]
        month: bool,
    },

    /// Budget versus actual spending for the reference month
    #[command(alias = "comparison")]
    Budgets,

    /// Every view at once
    #[command(alias = "all")]
    Dashboard,
}

/// Handle report commands
pub fn handle_report_command(ctx: &CommandContext, cmd: ReportCommands) -> DashboardResult<()> {
    let style = ctx.style();
    let dashboard = ctx.store.dashboard(ctx.period, ctx.options());

    let text = match cmd {
        ReportCommands::Summary => format_summary(&dashboard.summary, &style),
        ReportCommands::Insights => format_insights(&dashboard.insights, &style),
        ReportCommands::Series => format_monthly_series(&dashboard.monthly_series, &style),
        ReportCommands::Categories { month: false } => format_category_breakdown(
            "Expenses by Category",
            &dashboard.category_breakdown,
            &style,
        ),
        ReportCommands::Categories { month: true } => {
            let totals =
                aggregate_by_category(filter_by_period(ctx.store.transactions(), ctx.period));
            format_category_breakdown(
                &format!("Spending by Category ({})", ctx.period.label()),
                &totals.ranked(),
                &style,
            )
        }
        ReportCommands::Budgets => {
            format_budget_comparison(ctx.period, &dashboard.budget_comparison, &style)
        }
        ReportCommands::Dashboard => format_dashboard(&dashboard, &style),
    };

    print!("{}", text);
    Ok(())
}
