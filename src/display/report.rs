//! Summary report formatting
//!
//! Turns the aggregation results into the text blocks the shell prints.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::models::Money;

/// Format the overall total with its transaction count
pub fn format_total(total: Money, count: usize) -> String {
    format!("Total spending: {}\nNumber of transactions: {}\n", total, count)
}

/// Format a per-category total, or a not-found notice when nothing matched
pub fn format_category_total(category: &str, total: Money, count: usize) -> String {
    if count == 0 {
        format!("No expenses found for category: {}\n", category)
    } else {
        format!(
            "Total spending on {}: {}\nNumber of transactions: {}\n",
            category, total, count
        )
    }
}

/// Format the distinct category labels as a single line
pub fn format_categories(categories: &BTreeSet<String>) -> String {
    format!(
        "Categories: {}\n",
        categories.iter().cloned().collect::<Vec<_>>().join(", ")
    )
}

/// Format the daily spending summary, oldest day first
pub fn format_daily_summary(daily: &BTreeMap<NaiveDate, Money>) -> String {
    let mut output = String::from("Daily Spending Summary\n");
    for (date, amount) in daily {
        output.push_str(&format!("{}: {}\n", date.format("%Y-%m-%d"), amount));
    }
    output
}

/// Format the monthly spending summary, oldest month first
pub fn format_monthly_summary(monthly: &BTreeMap<String, Money>) -> String {
    let mut output = String::from("Monthly Spending Summary\n");
    for (month, amount) in monthly {
        output.push_str(&format!("{}: {}\n", month, amount));
    }
    output
}
