//! Summary derivator
//!
//! Top-line numbers shown at the head of the dashboard.

use serde::{Deserialize, Serialize};

use super::category::{aggregate_by_category, CategoryAmount};
use super::period::{filter_by_period, total_amount};
use super::{DEFAULT_RECENT_LIMIT, DEFAULT_TOP_LIMIT};
use crate::models::{Budget, Money, MonthPeriod, Transaction};

/// Top-line dashboard totals for one reference period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub period: MonthPeriod,
    /// Spending in the period
    pub total: Money,
    /// Sum of every budget, set or not
    pub total_budget: Money,
    /// `total` as a percentage of `total_budget`; 0 with no budget
    pub percentage_of_budget: f64,
    pub top_categories: Vec<CategoryAmount>,
    /// Most recently dated transactions of the whole collection
    pub recent_transactions: Vec<Transaction>,
}

impl DashboardSummary {
    pub fn generate(transactions: &[Transaction], budgets: &[Budget], period: MonthPeriod) -> Self {
        Self::generate_with_limits(
            transactions,
            budgets,
            period,
            DEFAULT_TOP_LIMIT,
            DEFAULT_RECENT_LIMIT,
        )
    }

    pub fn generate_with_limits(
        transactions: &[Transaction],
        budgets: &[Budget],
        period: MonthPeriod,
        top_limit: usize,
        recent_limit: usize,
    ) -> Self {
        let current = filter_by_period(transactions, period);
        let total = total_amount(current.iter().copied());
        let total_budget: Money = budgets.iter().map(|b| b.amount).sum();

        Self {
            period,
            total,
            total_budget,
            percentage_of_budget: total.percent_of(total_budget),
            top_categories: aggregate_by_category(current).top(top_limit),
            recent_transactions: recent_transactions(transactions, recent_limit),
        }
    }

    pub fn remaining_budget(&self) -> Money {
        self.total_budget - self.total
    }
}

/// Transactions sorted newest first, truncated to `limit`
///
/// Transactions sharing a date keep their input order.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.into_iter().take(limit).cloned().collect()
}
