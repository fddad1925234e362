//! Transaction model
//!
//! A transaction is a single dated expense. Transactions are only ever
//! replaced as a whole; there are no partial updates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Minimum number of characters in a transaction description
pub const MIN_DESCRIPTION_LEN: usize = 3;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier (generated when absent from input data)
    #[serde(default)]
    pub id: TransactionId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Local date and time of the expense
    #[serde(deserialize_with = "deserialize_date_time")]
    pub date: NaiveDateTime,

    /// What the money was spent on
    pub description: String,

    /// Category label; usually one of the built-in `Category` labels
    pub category: String,
}

impl Transaction {
    /// Create a new transaction with a fresh identifier
    pub fn new(
        amount: Money,
        date: NaiveDateTime,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            date,
            description: description.into(),
            category: category.into(),
        }
    }

    /// Check whether the category is one of the built-in labels
    pub fn has_known_category(&self) -> bool {
        Category::is_known(&self.category)
    }

    /// Validate the transaction against the entry rules
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_fields(self.amount, &self.description, &self.category)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// User-entered transaction fields, before an identifier is assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub amount: Money,
    #[serde(deserialize_with = "deserialize_date_time")]
    pub date: NaiveDateTime,
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    Category::default().label().to_string()
}

impl TransactionInput {
    pub fn new(
        amount: Money,
        date: NaiveDateTime,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            date,
            description: description.into(),
            category: category.into(),
        }
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_fields(self.amount, &self.description, &self.category)
    }

    /// Build a new transaction with a freshly generated identifier
    pub fn into_transaction(self) -> Transaction {
        Transaction::new(self.amount, self.date, self.description, self.category)
    }

    /// Build the replacement for an existing transaction, keeping its identifier
    pub fn into_replacement(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            date: self.date,
            description: self.description,
            category: self.category,
        }
    }
}

fn validate_fields(
    amount: Money,
    description: &str,
    category: &str,
) -> Result<(), TransactionValidationError> {
    if !amount.is_positive() {
        return Err(TransactionValidationError::NonPositiveAmount(amount));
    }

    if !amount.is_within_limit() {
        return Err(TransactionValidationError::AmountTooLarge(amount));
    }

    let len = description.chars().count();
    if len < MIN_DESCRIPTION_LEN {
        return Err(TransactionValidationError::DescriptionTooShort(len));
    }

    if category.trim().is_empty() {
        return Err(TransactionValidationError::MissingCategory);
    }

    Ok(())
}

/// Parse a transaction date
///
/// Accepts a bare date (`2025-01-15`, midnight), a local date-time
/// (`2025-01-15T09:30:00`, `2025-01-15 09:30`) or an RFC 3339 timestamp,
/// whose local wall-clock time is kept.
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn deserialize_date_time<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_date_time(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid transaction date: {}", raw)))
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    DescriptionTooShort(usize),
    MissingCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than 0 (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount must be at most {} (got {})", Money::MAX, amount)
            }
            Self::DescriptionTooShort(_) => write!(
                f,
                "Description must be at least {} characters",
                MIN_DESCRIPTION_LEN
            ),
            Self::MissingCategory => write!(f, "Category is required"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
