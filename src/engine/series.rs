//! Monthly series builder
//!
//! Buckets transactions by calendar month for the monthly expenses chart.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Money, MonthPeriod, Transaction};

/// One bar of the monthly expenses chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub period: MonthPeriod,
    /// Chart label, e.g. "Jan 2024"
    pub label: String,
    pub amount: Money,
}

/// One entry per month present in the input, oldest first
///
/// Ordering follows the calendar, so "Dec 2023" precedes "Jan 2024".
pub fn monthly_series<'a, I>(transactions: I) -> Vec<MonthlyTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut buckets: BTreeMap<MonthPeriod, Money> = BTreeMap::new();
    for txn in transactions {
        *buckets.entry(MonthPeriod::containing(&txn.date)).or_default() += txn.amount;
    }

    buckets
        .into_iter()
        .map(|(period, amount)| MonthlyTotal {
            period,
            label: period.label(),
            amount,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::txn;

    #[test]
    fn test_empty_input() {
        let none: Vec<Transaction> = Vec::new();
        assert!(monthly_series(&none).is_empty());
    }

    #[test]
    fn test_buckets_and_labels() {
        let transactions = vec![
            txn("2024-01-03", 1000, "Food & Dining"),
            txn("2024-01-28", 500, "Travel"),
            txn("2024-02-10", 200, "Travel"),
        ];
        let series = monthly_series(&transactions);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Jan 2024");
        assert_eq!(series[0].amount.cents(), 1500);
        assert_eq!(series[1].label, "Feb 2024");
        assert_eq!(series[1].amount.cents(), 200);
    }

    #[test]
    fn test_same_month_name_sorts_by_year() {
        let transactions = vec![
            txn("2025-01-15", 100, "Other"),
            txn("2023-12-15", 200, "Other"),
            txn("2024-01-15", 300, "Other"),
            txn("2024-04-15", 400, "Other"),
        ];
        let labels: Vec<_> = monthly_series(&transactions)
            .into_iter()
            .map(|m| m.label)
            .collect();
        assert_eq!(labels, vec!["Dec 2023", "Jan 2024", "Apr 2024", "Jan 2025"]);
    }

    #[test]
    fn test_sum_matches_input() {
        let transactions = vec![
            txn("2024-05-01", 123, "Other"),
            txn("2024-07-01", 456, "Other"),
            txn("2024-05-31", 789, "Other"),
        ];
        let total: Money = monthly_series(&transactions).iter().map(|m| m.amount).sum();
        assert_eq!(total.cents(), 123 + 456 + 789);
    }
}
