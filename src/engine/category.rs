//! Category aggregator
//!
//! Sums transaction amounts per category label. Only categories that occur
//! in the input appear in the result.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Money, Transaction};

/// A category together with an amount spent in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: Money,
}

/// Summed spending keyed by category label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTotals(BTreeMap<String, Money>);

impl CategoryTotals {
    /// Sum the given transactions per category
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals: BTreeMap<String, Money> = BTreeMap::new();
        for txn in transactions {
            *totals.entry(txn.category.clone()).or_default() += txn.amount;
        }
        Self(totals)
    }

    /// Spending in a category, if the category occurred at all
    pub fn get(&self, category: &str) -> Option<Money> {
        self.0.get(category).copied()
    }

    /// Spending in a category, zero when it did not occur
    pub fn amount_for(&self, category: &str) -> Money {
        self.get(category).unwrap_or_default()
    }

    /// Sum over every category
    pub fn total(&self) -> Money {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate categories in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.0.iter().map(|(category, amount)| (category.as_str(), *amount))
    }

    /// All categories sorted by amount, largest first
    ///
    /// Equal amounts keep label order.
    pub fn ranked(&self) -> Vec<CategoryAmount> {
        let mut ranked: Vec<CategoryAmount> = self
            .iter()
            .map(|(category, amount)| CategoryAmount {
                category: category.to_string(),
                amount,
            })
            .collect();
        ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
        ranked
    }

    /// The `limit` largest categories
    pub fn top(&self, limit: usize) -> Vec<CategoryAmount> {
        let mut ranked = self.ranked();
        ranked.truncate(limit);
        ranked
    }
}

/// Sum amounts per category over any transaction subset
pub fn aggregate_by_category<'a, I>(transactions: I) -> CategoryTotals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    CategoryTotals::from_transactions(transactions)
}

/// Spending per category over the whole collection, largest first
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryAmount> {
    aggregate_by_category(transactions).ranked()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::txn;

    #[test]
    fn test_empty_input() {
        let none: Vec<Transaction> = Vec::new();
        let totals = aggregate_by_category(&none);
        assert!(totals.is_empty());
        assert_eq!(totals.total(), Money::zero());
        assert!(totals.ranked().is_empty());
    }

    #[test]
    fn test_sums_per_category_without_zero_fill() {
        let transactions = vec![
            txn("2025-01-05", 1250, "Food & Dining"),
            txn("2025-01-06", 4000, "Travel"),
            txn("2025-01-07", 750, "Food & Dining"),
        ];
        let totals = aggregate_by_category(&transactions);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get("Food & Dining"), Some(Money::from_cents(2000)));
        assert_eq!(totals.get("Travel"), Some(Money::from_cents(4000)));
        assert_eq!(totals.get("Shopping"), None);
        assert_eq!(totals.amount_for("Shopping"), Money::zero());
        assert_eq!(totals.total().cents(), 6000);
    }

    #[test]
    fn test_order_of_input_does_not_matter() {
        let mut transactions = vec![
            txn("2025-01-05", 10, "Other"),
            txn("2025-01-06", 20, "Travel"),
            txn("2025-01-07", 30, "Other"),
        ];
        let forward = aggregate_by_category(&transactions);
        transactions.reverse();
        assert_eq!(aggregate_by_category(&transactions), forward);
    }

    #[test]
    fn test_ranked_and_top() {
        let transactions = vec![
            txn("2025-01-01", 100, "Education"),
            txn("2025-01-01", 500, "Travel"),
            txn("2025-01-01", 300, "Shopping"),
            txn("2025-01-01", 300, "Healthcare"),
        ];
        let totals = aggregate_by_category(&transactions);

        let ranked: Vec<_> = totals.ranked().into_iter().map(|c| c.category).collect();
        assert_eq!(ranked, vec!["Travel", "Healthcare", "Shopping", "Education"]);

        let top = totals.top(3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].amount.cents(), 500);
        assert_eq!(totals.top(10).len(), 4);
    }

    #[test]
    fn test_category_breakdown_covers_all_months() {
        let transactions = vec![
            txn("2024-11-01", 100, "Travel"),
            txn("2025-01-01", 200, "Travel"),
            txn("2025-01-01", 250, "Other"),
        ];
        let breakdown = category_breakdown(&transactions);
        assert_eq!(breakdown[0].category, "Travel");
        assert_eq!(breakdown[0].amount.cents(), 300);
        assert_eq!(breakdown[1].category, "Other");
    }

    #[test]
    fn test_serializes_as_map() {
        let totals = aggregate_by_category(&[txn("2025-01-01", 150, "Travel")]);
        assert_eq!(serde_json::to_string(&totals).unwrap(), r#"{"Travel":1.5}"#);
    }
}
