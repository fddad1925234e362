//! Dashboard view rendering
//!
//! One renderer per engine view plus [`format_dashboard`], which stacks them
//! into the full dashboard.

use super::report::{double_separator, format_bar, format_percentage, format_title, truncate};
use super::transaction::format_transaction_row;
use super::DisplayStyle;
use crate::engine::{
    BudgetComparisonRow, CategoryAmount, Dashboard, DashboardSummary, MonthOverMonth,
    MonthlyTotal, SpendingInsights, Trend,
};
use crate::models::{Money, MonthPeriod};

const BAR_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 20;

pub const NO_DATA: &str = "No data to display";
pub const NO_BUDGETS: &str = "No budgets set";
pub const NO_TRANSACTIONS: &str = "No transactions yet";

/// Trend sentence, e.g. "Spending increased by 12.5%"
pub fn format_trend(mom: &MonthOverMonth) -> String {
    let magnitude = mom.change_percentage.abs();
    match mom.trend() {
        Trend::Increase => format!("Spending increased by {:.1}%", magnitude),
        Trend::DecreaseOrFlat => format!("Spending decreased by {:.1}%", magnitude),
    }
}

fn format_amount_rows(rows: &[CategoryAmount], style: &DisplayStyle, output: &mut String) {
    for row in rows {
        output.push_str(&format!(
            "  {:<width$} {:>12}\n",
            truncate(&row.category, LABEL_WIDTH),
            style.money(row.amount),
            width = LABEL_WIDTH
        ));
    }
}

fn format_bar_rows<'a, I>(rows: I, style: &DisplayStyle, output: &mut String)
where
    I: IntoIterator<Item = (&'a str, Money)>,
{
    let rows: Vec<(&str, Money)> = rows.into_iter().collect();
    let max = rows.iter().map(|(_, amount)| amount.cents()).max().unwrap_or(0) as f64;

    for (label, amount) in rows {
        output.push_str(&format!(
            "  {:<width$} {} {:>12}\n",
            truncate(label, LABEL_WIDTH),
            format_bar(amount.cents() as f64, max, BAR_WIDTH),
            style.money(amount),
            width = LABEL_WIDTH
        ));
    }
}

/// Monthly total, budget usage, top categories and recent transactions
pub fn format_summary(summary: &DashboardSummary, style: &DisplayStyle) -> String {
    let mut output = format_title(&format!("Monthly Expenses ({})", summary.period.label()));

    output.push_str(&format!("  {}\n", style.money(summary.total)));
    if summary.total_budget.is_positive() {
        output.push_str(&format!(
            "  of {} budgeted ({} used)\n",
            style.money(summary.total_budget),
            format_percentage(summary.percentage_of_budget)
        ));
        output.push_str(&format!(
            "  {}\n",
            format_bar(summary.percentage_of_budget.min(100.0), 100.0, BAR_WIDTH)
        ));
    }

    output.push('\n');
    output.push_str(&format_title("Top Categories"));
    if summary.top_categories.is_empty() {
        output.push_str(&format!("  {}\n", NO_DATA));
    } else {
        format_amount_rows(&summary.top_categories, style, &mut output);
    }

    output.push('\n');
    output.push_str(&format_title("Recent Transactions"));
    if summary.recent_transactions.is_empty() {
        output.push_str(&format!("  {}\n", NO_TRANSACTIONS));
    } else {
        for txn in &summary.recent_transactions {
            output.push_str(&format!("  {}\n", format_transaction_row(txn, style)));
        }
    }

    output
}

/// Budget alerts, top spending and the month-over-month trend
pub fn format_insights(insights: &SpendingInsights, style: &DisplayStyle) -> String {
    let mom = &insights.month_over_month;
    let mut output = format_title(&format!("Spending Insights ({})", mom.current_period.label()));

    if insights.has_warnings() {
        output.push_str("Budget Alerts\n");
        for warning in &insights.budget_warnings {
            output.push_str(&format!(
                "  ! {} is {:.0}% over budget ({} / {})\n",
                warning.category,
                warning.percentage,
                style.money(warning.amount),
                style.money(warning.budget)
            ));
        }
        output.push('\n');
    }

    output.push_str("Top Spending Categories\n");
    if insights.top_spending.is_empty() {
        output.push_str(&format!("  {}\n", NO_DATA));
    } else {
        format_amount_rows(&insights.top_spending, style, &mut output);
    }

    output.push('\n');
    output.push_str("Month-over-Month Trend\n");
    output.push_str(&format!(
        "  {} ({} vs {} in {})\n",
        format_trend(mom),
        style.money(mom.this_month),
        style.money(mom.last_month),
        mom.previous_period.label()
    ));

    output
}

/// Chronological spending per month
pub fn format_monthly_series(series: &[MonthlyTotal], style: &DisplayStyle) -> String {
    let mut output = format_title("Monthly Expenses");
    if series.is_empty() {
        output.push_str(&format!("  {}\n", NO_DATA));
        return output;
    }

    format_bar_rows(
        series.iter().map(|m| (m.label.as_str(), m.amount)),
        style,
        &mut output,
    );
    output
}

/// Spending per category, largest first
pub fn format_category_breakdown(
    title: &str,
    rows: &[CategoryAmount],
    style: &DisplayStyle,
) -> String {
    let mut output = format_title(title);
    if rows.is_empty() {
        output.push_str(&format!("  {}\n", NO_DATA));
        return output;
    }

    format_bar_rows(
        rows.iter().map(|r| (r.category.as_str(), r.amount)),
        style,
        &mut output,
    );

    let total: Money = rows.iter().map(|r| r.amount).sum();
    output.push_str(&format!(
        "  {:<width$} {} {:>12}\n",
        "Total",
        " ".repeat(BAR_WIDTH),
        style.money(total),
        width = LABEL_WIDTH
    ));
    output
}

/// Budgeted versus actual spending per category
pub fn format_budget_comparison(
    period: MonthPeriod,
    rows: &[BudgetComparisonRow],
    style: &DisplayStyle,
) -> String {
    let mut output = format_title(&format!("Budget vs Actual ({})", period.label()));
    if rows.is_empty() {
        output.push_str(&format!("  {}\n", NO_BUDGETS));
        return output;
    }

    output.push_str(&format!(
        "  {:<width$} {:>12} {:>12} {:>12} {:>7}\n",
        "Category",
        "Budget",
        "Actual",
        "Remaining",
        "Used",
        width = LABEL_WIDTH
    ));
    for row in rows {
        let flag = if row.is_over_budget() { "  OVER" } else { "" };
        output.push_str(&format!(
            "  {:<width$} {:>12} {:>12} {:>12} {:>7}{}\n",
            truncate(&row.category, LABEL_WIDTH),
            style.money(row.budget),
            style.money(row.actual),
            style.money(row.remaining()),
            format_percentage(row.percent_used()),
            flag,
            width = LABEL_WIDTH
        ));
    }

    output
}

/// Every view of the dashboard, one section after another
pub fn format_dashboard(dashboard: &Dashboard, style: &DisplayStyle) -> String {
    let sections = [
        format_summary(&dashboard.summary, style),
        format_monthly_series(&dashboard.monthly_series, style),
        format_category_breakdown(
            "Expenses by Category",
            &dashboard.category_breakdown,
            style,
        ),
        format_budget_comparison(dashboard.period, &dashboard.budget_comparison, style),
        format_insights(&dashboard.insights, style),
    ];

    let rule = double_separator(72);
    let mut output = format!("{}\nFinance Dashboard: {}\n{}\n\n", rule, dashboard.period.label(), rule);
    output.push_str(&sections.join("\n"));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{period, txn};
    use crate::models::Budget;

    fn sample_dashboard() -> Dashboard {
        let transactions = vec![
            txn("2024-12-05", 10000, "Food & Dining"),
            txn("2025-01-05", 15000, "Food & Dining"),
            txn("2025-01-06", 2500, "Travel"),
        ];
        let budgets = vec![Budget::new("Food & Dining", Money::from_cents(10000))];
        Dashboard::build(&transactions, &budgets, period(2025, 1))
    }

    #[test]
    fn test_trend_wording() {
        let dashboard = sample_dashboard();
        assert_eq!(
            format_trend(&dashboard.insights.month_over_month),
            "Spending increased by 75.0%"
        );

        let flat = Dashboard::build(&[], &[], period(2025, 1));
        assert_eq!(
            format_trend(&flat.insights.month_over_month),
            "Spending decreased by 0.0%"
        );
    }

    #[test]
    fn test_insights_show_alerts() {
        let dashboard = sample_dashboard();
        let text = format_insights(&dashboard.insights, &DisplayStyle::default());
        assert!(text.contains("Food & Dining is 50% over budget ($150.00 / $100.00)"));
        assert!(text.contains("Spending increased by 75.0%"));
    }

    #[test]
    fn test_summary_uses_currency_symbol() {
        let dashboard = sample_dashboard();
        let style = DisplayStyle {
            currency_symbol: "€".to_string(),
            date_format: "%d.%m.%Y".to_string(),
        };
        let text = format_summary(&dashboard.summary, &style);
        assert!(text.contains("Monthly Expenses (Jan 2025)"));
        assert!(text.contains("€175.00"));
        assert!(text.contains("of €100.00 budgeted"));
        assert!(text.contains("05.01.2025"));
    }

    #[test]
    fn test_placeholders() {
        let empty = Dashboard::build(&[], &[], period(2025, 1));
        let style = DisplayStyle::default();

        assert!(format_monthly_series(&empty.monthly_series, &style).contains(NO_DATA));
        assert!(
            format_category_breakdown("Expenses by Category", &empty.category_breakdown, &style)
                .contains(NO_DATA)
        );
        assert!(format_budget_comparison(empty.period, &empty.budget_comparison, &style)
            .contains(NO_BUDGETS));
        assert!(format_summary(&empty.summary, &style).contains(NO_TRANSACTIONS));
    }

    #[test]
    fn test_series_in_calendar_order() {
        let dashboard = sample_dashboard();
        let text = format_monthly_series(&dashboard.monthly_series, &DisplayStyle::default());
        let dec = text.find("Dec 2024").unwrap();
        let jan = text.find("Jan 2025").unwrap();
        assert!(dec < jan);
    }

    #[test]
    fn test_budget_comparison_flags_overspend() {
        let dashboard = sample_dashboard();
        let text = format_budget_comparison(
            dashboard.period,
            &dashboard.budget_comparison,
            &DisplayStyle::default(),
        );
        assert!(text.contains("OVER"));
        assert!(text.contains("-$50.00"));
    }

    #[test]
    fn test_full_dashboard_has_every_section() {
        let text = format_dashboard(&sample_dashboard(), &DisplayStyle::default());
        for heading in [
            "Finance Dashboard: Jan 2025",
            "Monthly Expenses (Jan 2025)",
            "Expenses by Category",
            "Budget vs Actual (Jan 2025)",
            "Spending Insights (Jan 2025)",
        ] {
            assert!(text.contains(heading), "missing {}", heading);
        }
    }
}
