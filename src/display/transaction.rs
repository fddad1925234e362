//! Transaction display formatting

use super::dashboard::NO_TRANSACTIONS;
use super::report::{separator, truncate};
use super::DisplayStyle;
use crate::models::Transaction;

const DESCRIPTION_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 18;

/// Format a single transaction as one table row
pub fn format_transaction_row(txn: &Transaction, style: &DisplayStyle) -> String {
    format!(
        "{:<12} {:<dw$} {:<cw$} {:>12}",
        style.date(&txn.date),
        truncate(&txn.description, DESCRIPTION_WIDTH),
        truncate(&txn.category, CATEGORY_WIDTH),
        style.money(txn.amount),
        dw = DESCRIPTION_WIDTH,
        cw = CATEGORY_WIDTH
    )
}

/// Format transactions as a table, in the order given
pub fn format_transaction_list(transactions: &[&Transaction], style: &DisplayStyle) -> String {
    if transactions.is_empty() {
        return format!("{}\n", NO_TRANSACTIONS);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<dw$} {:<cw$} {:>12}  {}\n",
        "Date",
        "Description",
        "Category",
        "Amount",
        "ID",
        dw = DESCRIPTION_WIDTH,
        cw = CATEGORY_WIDTH
    ));
    output.push_str(&separator(12 + DESCRIPTION_WIDTH + CATEGORY_WIDTH + 12 + 17));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format!(
            "{}  {}\n",
            format_transaction_row(txn, style),
            txn.id.short()
        ));
    }

    output.push_str(&format!("\n{} transaction(s)\n", transactions.len()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::txn;

    #[test]
    fn test_row_format() {
        let t = txn("2025-01-15", 5000, "Food & Dining");
        let row = format_transaction_row(&t, &DisplayStyle::default());
        assert!(row.starts_with("2025-01-15"));
        assert!(row.contains("Test expense"));
        assert!(row.contains("Food & Dining"));
        assert!(row.ends_with("$50.00"));
    }

    #[test]
    fn test_empty_list_placeholder() {
        assert_eq!(
            format_transaction_list(&[], &DisplayStyle::default()),
            "No transactions yet\n"
        );
    }

    #[test]
    fn test_list_includes_short_ids() {
        let t = txn("2025-01-15", 5000, "Travel");
        let text = format_transaction_list(&[&t], &DisplayStyle::default());
        assert!(text.contains(&t.id.short()));
        assert!(text.contains("1 transaction(s)"));
    }
}
