//! Core data models for the finance dashboard
//!
//! Transactions, budgets, the built-in category set, money amounts and
//! calendar month periods.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{Budget, BudgetValidationError};
pub use category::{Category, UnknownCategory};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use period::{MonthPeriod, PeriodParseError};
pub use transaction::{
    parse_date_time, Transaction, TransactionInput, TransactionValidationError,
    MIN_DESCRIPTION_LEN,
};
