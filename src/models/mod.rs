//! Core data models for spendlog
//!
//! This module contains the data structures that represent the expense
//! domain: monetary amounts, expense records, and the ordered ledger.

pub mod expense;
pub mod ledger;
pub mod money;

pub use expense::{normalize_category, Expense, ExpensePatch, UNCATEGORIZED};
pub use ledger::Ledger;
pub use money::Money;
