//! Spending categories
//!
//! The dashboard offers a fixed set of nine category labels for entry forms
//! and budget settings. Transactions and budgets still carry the category as
//! a plain string, so data using any other label is accepted and aggregated
//! like the rest; `Category` only describes the built-in choices.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the built-in spending categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "String", try_from = "String")]
pub enum Category {
    FoodAndDining,
    Transportation,
    Shopping,
    Entertainment,
    BillsAndUtilities,
    Healthcare,
    Travel,
    Education,
    #[default]
    Other,
}

impl Category {
    /// All built-in categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::FoodAndDining,
            Self::Transportation,
            Self::Shopping,
            Self::Entertainment,
            Self::BillsAndUtilities,
            Self::Healthcare,
            Self::Travel,
            Self::Education,
            Self::Other,
        ]
    }

    /// The label used as the grouping key
    pub fn label(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::BillsAndUtilities => "Bills & Utilities",
            Self::Healthcare => "Healthcare",
            Self::Travel => "Travel",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// Look up a built-in category by its exact label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.label() == label)
    }

    /// Check whether a free-form category string is one of the built-in labels
    pub fn is_known(label: &str) -> bool {
        Self::from_label(label).is_some()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s.trim()).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl TryFrom<String> for Category {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Error for a label outside the built-in category set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}
