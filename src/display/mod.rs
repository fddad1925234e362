//! Display formatting for terminal output
//!
//! Text renderers for every dashboard view. Amounts use the configured
//! currency symbol and dates the configured strftime format.

pub mod category;
pub mod dashboard;
pub mod report;
pub mod transaction;

pub use category::format_category_list;
pub use dashboard::{
    format_budget_comparison, format_category_breakdown, format_dashboard, format_insights,
    format_monthly_series, format_summary, format_trend,
};
pub use transaction::{format_transaction_list, format_transaction_row};

use chrono::NaiveDateTime;
use std::fmt::Write;

use crate::config::Settings;
use crate::models::Money;

/// Presentation preferences shared by the renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayStyle {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl DisplayStyle {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a date, falling back to ISO when the configured format is invalid
    pub fn date(&self, date: &NaiveDateTime) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.format("%Y-%m-%d").to_string();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date_time;

    #[test]
    fn test_style_from_settings() {
        let mut settings = Settings::default();
        settings.currency_symbol = "£".to_string();
        let style = DisplayStyle::from_settings(&settings);
        assert_eq!(style.money(Money::from_cents(-1250)), "-£12.50");
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let date = parse_date_time("2025-01-15").unwrap();
        let style = DisplayStyle {
            currency_symbol: "$".to_string(),
            date_format: "%Q".to_string(),
        };
        assert_eq!(style.date(&date), "2025-01-15");
    }
}
