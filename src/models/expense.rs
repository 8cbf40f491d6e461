//! Expense record model
//!
//! An expense is a single expenditure: a positive amount, a title-cased
//! category label, and a calendar date. Records carry no identity beyond
//! their position in the ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Category label used when the user leaves the category blank
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent, always positive
    pub amount: Money,

    /// Category label, title-cased, never empty
    pub category: String,

    /// Calendar date of the expense
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense record
    ///
    /// The category is normalized to title case; a blank category becomes
    /// "Uncategorized".
    ///
    /// # Errors
    ///
    /// Returns a validation error if the amount is not positive.
    pub fn new(amount: Money, category: &str, date: NaiveDate) -> ExpenseResult<Self> {
        if !amount.is_positive() {
            return Err(ExpenseError::Validation(format!(
                "Amount must be positive, got {}",
                amount
            )));
        }

        Ok(Self {
            amount,
            category: normalize_category(category),
            date,
        })
    }

    /// Apply a partial update, keeping any field the patch leaves out
    ///
    /// # Errors
    ///
    /// Returns a validation error if the patched amount is not positive.
    pub fn apply(&mut self, patch: ExpensePatch) -> ExpenseResult<()> {
        if let Some(amount) = patch.amount {
            if !amount.is_positive() {
                return Err(ExpenseError::Validation(format!(
                    "Amount must be positive, got {}",
                    amount
                )));
            }
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = normalize_category(&category);
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Partial update for an expense; `None` fields keep the prior value
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ExpensePatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the patch changes anything
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.category.is_none() && self.date.is_none()
    }

    /// Set the new amount
    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the new category (normalized on apply)
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the new date
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Normalize a category label to title case
///
/// Leading/trailing whitespace is stripped and each word is capitalized,
/// so "food", "FOOD" and " food " all store as "Food". A blank label
/// becomes "Uncategorized".
pub fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return UNCATEGORIZED.to_string();
    }

    trimmed
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
