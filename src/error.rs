//! Custom error types for the finance dashboard
//!
//! The aggregation engine itself is total over well-formed input and never
//! returns these errors. They cover the layers around it: configuration,
//! loading data files, validating user input and exporting results.

use thiserror::Error;

use crate::models::{
    BudgetValidationError, MoneyParseError, PeriodParseError, TransactionValidationError,
};

/// The main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl DashboardError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for transactions
    pub fn duplicate_transaction(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for budgets (one budget per category)
    pub fn duplicate_budget(category: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Budget",
            identifier: category.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for DashboardError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<TransactionValidationError> for DashboardError {
    fn from(err: TransactionValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<BudgetValidationError> for DashboardError {
    fn from(err: BudgetValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<PeriodParseError> for DashboardError {
    fn from(err: PeriodParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<MoneyParseError> for DashboardError {
    fn from(err: MoneyParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = DashboardError::transaction_not_found("txn-1234abcd");
        assert_eq!(err.to_string(), "Transaction not found: txn-1234abcd");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_duplicate_budget_error() {
        let err = DashboardError::duplicate_budget("Travel");
        assert_eq!(err.to_string(), "Budget already exists: Travel");
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DashboardError = io_err.into();
        assert!(matches!(err, DashboardError::Io(_)));
    }

    #[test]
    fn test_from_validation_error() {
        let err: DashboardError = TransactionValidationError::MissingCategory.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Category is required");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::Json(_)));
    }
}
