//! Analytics engine
//!
//! Pure functions deriving dashboard views from a snapshot of transactions
//! and budgets. Nothing here reads the clock: the reference month is always
//! passed in, and every view is recomputed in full from its inputs.

pub mod category;
pub mod comparison;
pub mod insights;
pub mod period;
pub mod series;
pub mod summary;

pub use category::{aggregate_by_category, category_breakdown, CategoryAmount, CategoryTotals};
pub use comparison::{compare_budgets, compare_with_totals, BudgetComparisonRow};
pub use insights::{budget_warnings, BudgetWarning, MonthOverMonth, SpendingInsights, Trend};
pub use period::{filter_by_period, period_total, total_amount};
pub use series::{monthly_series, MonthlyTotal};
pub use summary::{recent_transactions, DashboardSummary};

use serde::{Deserialize, Serialize};

use crate::models::{Budget, MonthPeriod, Transaction};

/// Number of categories listed as top spending
pub const DEFAULT_TOP_LIMIT: usize = 3;

/// Number of transactions listed as recent
pub const DEFAULT_RECENT_LIMIT: usize = 3;

/// List sizes for the composed dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOptions {
    pub top_limit: usize,
    pub recent_limit: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            top_limit: DEFAULT_TOP_LIMIT,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

/// Every dashboard view for one reference period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub period: MonthPeriod,
    pub summary: DashboardSummary,
    pub monthly_series: Vec<MonthlyTotal>,
    pub budget_comparison: Vec<BudgetComparisonRow>,
    /// All-time spending per category, largest first
    pub category_breakdown: Vec<CategoryAmount>,
    pub insights: SpendingInsights,
}

impl Dashboard {
    pub fn build(transactions: &[Transaction], budgets: &[Budget], period: MonthPeriod) -> Self {
        Self::build_with(transactions, budgets, period, DashboardOptions::default())
    }

    pub fn build_with(
        transactions: &[Transaction],
        budgets: &[Budget],
        period: MonthPeriod,
        options: DashboardOptions,
    ) -> Self {
        tracing::debug!(
            transactions = transactions.len(),
            budgets = budgets.len(),
            %period,
            "building dashboard"
        );

        Self {
            period,
            summary: DashboardSummary::generate_with_limits(
                transactions,
                budgets,
                period,
                options.top_limit,
                options.recent_limit,
            ),
            monthly_series: monthly_series(transactions),
            budget_comparison: compare_budgets(transactions, budgets, period),
            category_breakdown: category_breakdown(transactions),
            insights: SpendingInsights::generate_with_limit(
                transactions,
                budgets,
                period,
                options.top_limit,
            ),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{period, txn};
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_build_composes_all_views() {
        let transactions = vec![
            txn("2024-12-10", 8000, "Travel"),
            txn("2025-01-05", 60000, "Food & Dining"),
            txn("2025-01-07", 2000, "Travel"),
        ];
        let budgets = vec![
            Budget::new("Food & Dining", Money::from_cents(50000)),
            Budget::new("Travel", Money::zero()),
        ];

        let dashboard = Dashboard::build(&transactions, &budgets, period(2025, 1));
        assert_eq!(dashboard.summary.total.cents(), 62000);
        assert_eq!(dashboard.monthly_series.len(), 2);
        assert_eq!(dashboard.budget_comparison.len(), 1);
        assert_eq!(dashboard.budget_comparison[0].actual.cents(), 60000);
        assert_eq!(dashboard.category_breakdown[0].category, "Food & Dining");
        assert_eq!(dashboard.category_breakdown[1].amount.cents(), 10000);
        assert_eq!(dashboard.insights.budget_warnings.len(), 1);
    }

    #[test]
    fn test_build_is_idempotent() {
        let transactions = vec![txn("2025-01-05", 100, "Other")];
        let first = Dashboard::build(&transactions, &[], period(2025, 1));
        let second = Dashboard::build(&transactions, &[], period(2025, 1));
        assert_eq!(first, second);
    }

    #[test]
    fn test_options_limit_lists() {
        let transactions = vec![
            txn("2025-01-01", 100, "A"),
            txn("2025-01-02", 200, "B"),
            txn("2025-01-03", 300, "C"),
        ];
        let options = DashboardOptions {
            top_limit: 1,
            recent_limit: 2,
        };
        let dashboard = Dashboard::build_with(&transactions, &[], period(2025, 1), options);
        assert_eq!(dashboard.summary.top_categories.len(), 1);
        assert_eq!(dashboard.summary.recent_transactions.len(), 2);
        assert_eq!(dashboard.insights.top_spending.len(), 1);
    }

    #[test]
    fn test_oversized_amounts_saturate_instead_of_overflowing() {
        let transactions = vec![
            txn("2025-01-01", i64::MAX, "Travel"),
            txn("2025-01-02", i64::MAX, "Travel"),
            txn("2024-12-02", i64::MAX, "Travel"),
        ];
        let budgets = vec![Budget::new("Travel", Money::from_cents(i64::MAX))];
        let dashboard = Dashboard::build(&transactions, &budgets, period(2025, 1));
        assert_eq!(dashboard.summary.total, Money::from_cents(i64::MAX));
        assert_eq!(dashboard.budget_comparison[0].remaining(), Money::zero());
    }
}
