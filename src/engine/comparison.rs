//! Budget comparator
//!
//! Pairs every set budget with what was actually spent in the category
//! during the period, for the budget-vs-actual chart.

use serde::{Deserialize, Serialize};

use super::category::{aggregate_by_category, CategoryTotals};
use super::period::filter_by_period;
use crate::models::{Budget, Money, MonthPeriod, Transaction};

/// Budgeted versus actual spending for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetComparisonRow {
    pub category: String,
    pub budget: Money,
    pub actual: Money,
}

impl BudgetComparisonRow {
    /// Budget left over (negative when overspent)
    pub fn remaining(&self) -> Money {
        self.budget - self.actual
    }

    pub fn is_over_budget(&self) -> bool {
        self.actual > self.budget
    }

    /// Actual spending as a percentage of the budget
    pub fn percent_used(&self) -> f64 {
        self.actual.percent_of(self.budget)
    }
}

/// Compare set budgets with already aggregated category totals
///
/// Budgets of zero or less are left out. Rows are ordered by budgeted
/// amount, largest first; equal budgets keep their input order.
pub fn compare_with_totals(totals: &CategoryTotals, budgets: &[Budget]) -> Vec<BudgetComparisonRow> {
    let mut rows: Vec<BudgetComparisonRow> = budgets
        .iter()
        .filter(|b| b.is_set())
        .map(|b| BudgetComparisonRow {
            category: b.category.clone(),
            budget: b.amount,
            actual: totals.amount_for(&b.category),
        })
        .collect();
    rows.sort_by(|a, b| b.budget.cmp(&a.budget));
    rows
}

/// Compare set budgets with spending during `period`
pub fn compare_budgets(
    transactions: &[Transaction],
    budgets: &[Budget],
    period: MonthPeriod,
) -> Vec<BudgetComparisonRow> {
    let totals = aggregate_by_category(filter_by_period(transactions, period));
    compare_with_totals(&totals, budgets)
}
