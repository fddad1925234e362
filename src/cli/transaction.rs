//! CLI commands for browsing transactions

use clap::Subcommand;

use super::CommandContext;
use crate::display::format_transaction_list;
use crate::error::DashboardResult;
use crate::models::{MonthPeriod, Transaction};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// List transactions, newest first
    #[command(alias = "ls")]
    List {
        /// Show at most N transactions
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Only show transactions in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only show transactions in the reference month
        #[arg(short, long)]
        month: bool,
    },
}

/// Handle transaction commands
pub fn handle_transaction_command(
    ctx: &CommandContext,
    cmd: TransactionCommands,
) -> DashboardResult<()> {
    match cmd {
        TransactionCommands::List {
            limit,
            category,
            month,
        } => {
            let period = month.then_some(ctx.period);
            let list = select_transactions(
                ctx.store.transactions(),
                category.as_deref(),
                period,
                limit,
            );
            print!("{}", format_transaction_list(&list, &ctx.style()));
            Ok(())
        }
    }
}

/// Filter and sort transactions for the list view
///
/// Newest first; transactions on the same date keep their input order.
pub fn select_transactions<'a>(
    transactions: &'a [Transaction],
    category: Option<&str>,
    period: Option<MonthPeriod>,
    limit: Option<usize>,
) -> Vec<&'a Transaction> {
    let mut list: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| category.map_or(true, |c| t.category == c))
        .filter(|t| period.map_or(true, |p| p.contains(&t.date)))
        .collect();

    list.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = limit {
        list.truncate(limit);
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{period, txn};

    #[test]
    fn test_select_newest_first() {
        let transactions = vec![
            txn("2025-01-01", 100, "Travel"),
            txn("2025-01-20", 200, "Shopping"),
            txn("2024-12-31", 300, "Travel"),
        ];
        let list = select_transactions(&transactions, None, None, None);
        let cents: Vec<i64> = list.iter().map(|t| t.amount.cents()).collect();
        assert_eq!(cents, vec![200, 100, 300]);
    }

    #[test]
    fn test_select_filters() {
        let transactions = vec![
            txn("2025-01-01", 100, "Travel"),
            txn("2025-01-20", 200, "Shopping"),
            txn("2024-12-31", 300, "Travel"),
        ];

        let travel = select_transactions(&transactions, Some("Travel"), None, None);
        assert_eq!(travel.len(), 2);

        let january = select_transactions(&transactions, None, Some(period(2025, 1)), None);
        assert_eq!(january.len(), 2);

        let limited = select_transactions(&transactions, Some("Travel"), Some(period(2025, 1)), Some(5));
        assert_eq!(limited.len(), 1);

        let one = select_transactions(&transactions, None, None, Some(1));
        assert_eq!(one[0].amount.cents(), 200);
    }
}
