//! Expense file persistence
//!
//! Loads and saves the whole ledger as a single JSON file. Every save is a
//! full-file overwrite; there is no incremental append format.

use std::path::PathBuf;

use crate::error::ExpenseResult;
use crate::models::Ledger;

use super::file_io::{read_json, write_json_atomic};

/// Persists the expense ledger to a JSON file
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the ledger from disk
    ///
    /// Returns an empty ledger when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns `CorruptState` when the file exists but is not a valid
    /// expense array.
    pub fn load(&self) -> ExpenseResult<Ledger> {
        read_json(&self.path)
    }

    /// Save the full ledger, overwriting prior state
    pub fn save(&self, ledger: &Ledger) -> ExpenseResult<()> {
        write_json_atomic(&self.path, ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;
    use crate::models::{Expense, Money};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        (temp_dir, store)
    }

    fn expense(cents: i64, category: &str, date: &str) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            category,
            date.parse::<NaiveDate>().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_load_missing_file_gives_empty_ledger() {
        let (_temp_dir, store) = create_test_store();
        let ledger = store.load().unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let (_temp_dir, store) = create_test_store();

        let mut ledger = Ledger::new();
        ledger.append(expense(1250, "food", "2024-01-05"));
        ledger.append(expense(700, "Food", "2024-02-01"));

        store.save(&ledger).unwrap();
        let reloaded = store.load().unwrap();

        // Amount, normalized category and date all survive the roundtrip
        assert_eq!(ledger, reloaded);
        assert_eq!(reloaded.get(0).unwrap().category, "Food");
    }

    #[test]
    fn test_save_is_idempotent() {
        let (_temp_dir, store) = create_test_store();

        let mut ledger = Ledger::new();
        ledger.append(expense(1250, "Food", "2024-01-05"));

        store.save(&ledger).unwrap();
        let first = fs::read(store.path()).unwrap();

        store.save(&ledger).unwrap();
        let second = fs::read(store.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_persisted_format_is_top_level_array() {
        let (_temp_dir, store) = create_test_store();

        let mut ledger = Ledger::new();
        ledger.append(expense(1250, "Food", "2024-01-05"));
        store.save(&ledger).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let array = value.as_array().expect("top-level JSON array");
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["amount"], serde_json::json!(12.5));
        assert_eq!(array[0]["category"], "Food");
        assert_eq!(array[0]["date"], "2024-01-05");
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), "{ definitely not an expense array").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, ExpenseError::CorruptState(_)));
    }
}
