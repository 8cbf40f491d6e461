//! The expense ledger
//!
//! An ordered sequence of expense records. Records are addressed by their
//! 0-based position; the display layer renders 1-based positions. Removal
//! shifts subsequent records down, so positions never have gaps.

use serde::{Deserialize, Serialize};

use super::expense::{Expense, ExpensePatch};
use crate::error::{ExpenseError, ExpenseResult};

/// Ordered sequence of expenses
///
/// Serde-transparent, so the persisted file is a top-level JSON array of
/// expense objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check whether the ledger has no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Get the expense at a 0-based index
    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.expenses.get(index)
    }

    /// All expenses, in ledger order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Append an expense to the tail
    pub fn append(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Apply a partial update to the expense at a 0-based index
    ///
    /// # Errors
    ///
    /// Returns `InvalidIndex` if the index is out of range, or a validation
    /// error from the patch (leaving the record unchanged).
    pub fn update_at(&mut self, index: usize, patch: ExpensePatch) -> ExpenseResult<&Expense> {
        let len = self.expenses.len();
        let expense = self
            .expenses
            .get_mut(index)
            .ok_or_else(|| ExpenseError::invalid_index(index, len))?;
        expense.apply(patch)?;
        Ok(&self.expenses[index])
    }

    /// Remove and return the expense at a 0-based index
    ///
    /// Subsequent records shift down by one position.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIndex` if the index is out of range.
    pub fn remove_at(&mut self, index: usize) -> ExpenseResult<Expense> {
        if index >= self.expenses.len() {
            return Err(ExpenseError::invalid_index(index, self.expenses.len()));
        }
        Ok(self.expenses.remove(index))
    }
}

impl From<Vec<Expense>> for Ledger {
    fn from(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expense(cents: i64, category: &str, date: &str) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            category,
            date.parse::<NaiveDate>().unwrap(),
        )
        .unwrap()
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.append(expense(1250, "Food", "2024-01-05"));
        ledger.append(expense(700, "Food", "2024-02-01"));
        ledger.append(expense(300, "Transport", "2024-02-03"));
        ledger
    }

    #[test]
    fn test_append() {
        let mut ledger = Ledger::new();
        assert!(ledger.is_empty());

        ledger.append(expense(1250, "Food", "2024-01-05"));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(0).unwrap().category, "Food");
    }

    #[test]
    fn test_update_at() {
        let mut ledger = sample_ledger();

        let updated = ledger
            .update_at(1, ExpensePatch::new().amount(Money::from_cents(800)))
            .unwrap();
        assert_eq!(updated.amount.cents(), 800);
        // Unpatched fields kept
        assert_eq!(ledger.get(1).unwrap().category, "Food");
    }

    #[test]
    fn test_update_at_out_of_range() {
        let mut ledger = sample_ledger();
        let err = ledger.update_at(3, ExpensePatch::new()).unwrap_err();
        assert!(err.is_invalid_index());
    }

    #[test]
    fn test_remove_at_shifts_down() {
        let mut ledger = sample_ledger();

        let removed = ledger.remove_at(0).unwrap();
        assert_eq!(removed.amount.cents(), 1250);
        assert_eq!(ledger.len(), 2);
        // Remaining records keep their relative order with no gap
        assert_eq!(ledger.get(0).unwrap().amount.cents(), 700);
        assert_eq!(ledger.get(1).unwrap().category, "Transport");
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut ledger = sample_ledger();
        let err = ledger.remove_at(5).unwrap_err();
        assert!(err.is_invalid_index());
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_serializes_as_top_level_array() {
        let mut ledger = Ledger::new();
        ledger.append(expense(1250, "Food", "2024-01-05"));

        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(
            json,
            r#"[{"amount":12.5,"category":"Food","date":"2024-01-05"}]"#
        );

        let back: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(ledger, back);
    }
}
