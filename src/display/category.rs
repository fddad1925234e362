//! Category list formatting

use super::DisplayStyle;
use crate::models::{Budget, Category};

/// The built-in categories with any budget set for them
pub fn format_category_list(budgets: &[Budget], style: &DisplayStyle) -> String {
    let mut output = String::from("Categories\n");

    for category in Category::all() {
        let budget = budgets
            .iter()
            .find(|b| b.category == category.label())
            .filter(|b| b.is_set());

        match budget {
            Some(b) => output.push_str(&format!(
                "  {:<20} budget {}\n",
                category.label(),
                style.money(b.amount)
            )),
            None => output.push_str(&format!("  {}\n", category.label())),
        }
    }

    let custom: Vec<&Budget> = budgets
        .iter()
        .filter(|b| !Category::is_known(&b.category))
        .collect();
    if !custom.is_empty() {
        output.push_str("\nOther budgeted categories\n");
        for b in custom {
            output.push_str(&format!("  {:<20} budget {}\n", b.category, style.money(b.amount)));
        }
    }

    output
}
