//! Insight derivator
//!
//! Budget overage warnings, the top spending categories and the
//! month-over-month spending trend for one reference period.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{aggregate_by_category, CategoryAmount, CategoryTotals};
use super::period::{filter_by_period, period_total};
use super::DEFAULT_TOP_LIMIT;
use crate::models::{Budget, Money, MonthPeriod, Transaction};

/// A category whose spending went over its budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetWarning {
    pub category: String,
    /// Actual spending in the period
    pub amount: Money,
    pub budget: Money,
    /// How far spending exceeds the budget, as a percentage of the budget
    pub percentage: f64,
}

/// Direction of the month-over-month change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Spending went up (adverse)
    Increase,
    /// Spending went down or stayed the same (favorable)
    DecreaseOrFlat,
}

impl Trend {
    pub fn is_adverse(&self) -> bool {
        matches!(self, Self::Increase)
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increase => write!(f, "increased"),
            Self::DecreaseOrFlat => write!(f, "decreased"),
        }
    }
}

/// Spending this month compared with the month before
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthOverMonth {
    pub current_period: MonthPeriod,
    pub previous_period: MonthPeriod,
    pub this_month: Money,
    pub last_month: Money,
    /// Percentage change; 0 when nothing was spent last month
    pub change_percentage: f64,
}

impl MonthOverMonth {
    pub fn calculate(transactions: &[Transaction], period: MonthPeriod) -> Self {
        let previous_period = period.prev();
        let this_month = period_total(transactions, period);
        let last_month = period_total(transactions, previous_period);

        Self {
            current_period: period,
            previous_period,
            this_month,
            last_month,
            change_percentage: (this_month - last_month).percent_of(last_month),
        }
    }

    pub fn trend(&self) -> Trend {
        if self.change_percentage > 0.0 {
            Trend::Increase
        } else {
            Trend::DecreaseOrFlat
        }
    }
}

/// Warnings for every set budget that was strictly exceeded
///
/// Sorted by overage percentage, largest first.
pub fn budget_warnings(totals: &CategoryTotals, budgets: &[Budget]) -> Vec<BudgetWarning> {
    let mut warnings: Vec<BudgetWarning> = budgets
        .iter()
        .filter(|b| b.is_set())
        .filter_map(|b| {
            let spent = totals.get(&b.category)?;
            (spent > b.amount).then(|| BudgetWarning {
                category: b.category.clone(),
                amount: spent,
                budget: b.amount,
                percentage: (spent - b.amount).percent_of(b.amount),
            })
        })
        .collect();
    warnings.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    warnings
}

/// All spending insights for one reference period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingInsights {
    pub budget_warnings: Vec<BudgetWarning>,
    pub top_spending: Vec<CategoryAmount>,
    pub month_over_month: MonthOverMonth,
}

impl SpendingInsights {
    pub fn generate(transactions: &[Transaction], budgets: &[Budget], period: MonthPeriod) -> Self {
        Self::generate_with_limit(transactions, budgets, period, DEFAULT_TOP_LIMIT)
    }

    /// Like [`SpendingInsights::generate`] with a custom number of top categories
    pub fn generate_with_limit(
        transactions: &[Transaction],
        budgets: &[Budget],
        period: MonthPeriod,
        top_limit: usize,
    ) -> Self {
        let totals = aggregate_by_category(filter_by_period(transactions, period));

        Self {
            budget_warnings: budget_warnings(&totals, budgets),
            top_spending: totals.top(top_limit),
            month_over_month: MonthOverMonth::calculate(transactions, period),
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.budget_warnings.is_empty()
    }
}
