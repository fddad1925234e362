//! Period filter
//!
//! Selects the transactions that fall within one calendar month.

use crate::models::{Money, MonthPeriod, Transaction};

/// Transactions dated within `period`, in their original order
pub fn filter_by_period(transactions: &[Transaction], period: MonthPeriod) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|t| period.contains(&t.date))
        .collect()
}

/// Total amount of a transaction subset
pub fn total_amount<'a, I>(transactions: I) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions.into_iter().map(|t| t.amount).sum()
}

/// Total amount spent within `period`
pub fn period_total(transactions: &[Transaction], period: MonthPeriod) -> Money {
    total_amount(filter_by_period(transactions, period))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::txn;

    #[test]
    fn test_empty_input() {
        let period = MonthPeriod::new(2025, 1).unwrap();
        assert!(filter_by_period(&[], period).is_empty());
        assert_eq!(period_total(&[], period), Money::zero());
    }

    #[test]
    fn test_filters_month_and_year() {
        let transactions = vec![
            txn("2025-01-05", 1000, "Food & Dining"),
            txn("2024-01-20", 2000, "Food & Dining"),
            txn("2025-02-01", 3000, "Travel"),
            txn("2025-01-31T23:59:00", 4000, "Travel"),
        ];
        let period = MonthPeriod::new(2025, 1).unwrap();

        let filtered = filter_by_period(&transactions, period);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, transactions[0].id);
        assert_eq!(filtered[1].id, transactions[3].id);
        assert_eq!(period_total(&transactions, period).cents(), 5000);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let transactions = vec![
            txn("2025-03-05", 1000, "Shopping"),
            txn("2025-01-05", 500, "Shopping"),
        ];
        let before = transactions.clone();
        let _ = filter_by_period(&transactions, MonthPeriod::new(2025, 1).unwrap());
        assert_eq!(transactions, before);
    }
}
