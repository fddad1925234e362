//! Monthly budget model
//!
//! A budget caps monthly spending for one category. The category string is
//! the key: it is matched against transaction categories by exact equality.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// A monthly spending cap for a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Category this cap applies to
    pub category: String,

    /// Monthly cap; zero means no budget is set for the category
    pub amount: Money,
}

impl Budget {
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }

    /// Create a budget for one of the built-in categories
    pub fn for_category(category: Category, amount: Money) -> Self {
        Self::new(category.label(), amount)
    }

    /// Whether this budget participates in comparisons and alerts
    pub fn is_set(&self) -> bool {
        self.amount.is_positive()
    }

    /// Parse a `Category=Amount` assignment, e.g. `"Food & Dining=400"`
    pub fn parse_assignment(s: &str) -> Result<Self, BudgetValidationError> {
        let (category, amount) = s
            .rsplit_once('=')
            .ok_or_else(|| BudgetValidationError::InvalidAssignment(s.to_string()))?;

        let amount = Money::parse(amount)
            .map_err(|_| BudgetValidationError::InvalidAssignment(s.to_string()))?;
        let budget = Self::new(category.trim(), amount);
        budget.validate()?;
        Ok(budget)
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeAmount(self.amount));
        }

        if !self.amount.is_within_limit() {
            return Err(BudgetValidationError::AmountTooLarge(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.amount)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NegativeAmount(Money),
    AmountTooLarge(Money),
    InvalidAssignment(String),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Budget must be 0 or greater (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Budget must be at most {} (got {})", Money::MAX, amount)
            }
            Self::InvalidAssignment(s) => write!(
                f,
                "Invalid budget '{}': expected CATEGORY=AMOUNT, e.g. \"Travel=250\"",
                s
            ),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_set() {
        assert!(Budget::new("Travel", Money::from_cents(1)).is_set());
        assert!(!Budget::new("Travel", Money::zero()).is_set());
    }

    #[test]
    fn test_validation() {
        assert!(Budget::for_category(Category::Travel, Money::zero()).validate().is_ok());
        assert_eq!(
            Budget::new("", Money::from_cents(100)).validate(),
            Err(BudgetValidationError::EmptyCategory)
        );
        assert_eq!(
            Budget::new("Travel", Money::from_cents(-100)).validate(),
            Err(BudgetValidationError::NegativeAmount(Money::from_cents(-100)))
        );
        assert_eq!(
            Budget::new("Travel", Money::from_cents(i64::MAX)).validate(),
            Err(BudgetValidationError::AmountTooLarge(Money::from_cents(i64::MAX)))
        );
    }

    #[test]
    fn test_parse_assignment() {
        let budget = Budget::parse_assignment("Food & Dining=400.50").unwrap();
        assert_eq!(budget.category, "Food & Dining");
        assert_eq!(budget.amount.cents(), 40050);

        assert!(matches!(
            Budget::parse_assignment("Travel"),
            Err(BudgetValidationError::InvalidAssignment(_))
        ));
        assert!(matches!(
            Budget::parse_assignment("Travel=99999999999999999"),
            Err(BudgetValidationError::InvalidAssignment(_))
        ));
        assert!(matches!(
            Budget::parse_assignment("Travel=-5"),
            Err(BudgetValidationError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let budget = Budget::for_category(Category::FoodAndDining, Money::from_cents(50000));
        let json = serde_json::to_string(&budget).unwrap();
        assert_eq!(json, r#"{"category":"Food & Dining","amount":500.0}"#);
        let back: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, budget);
    }
}
