//! spendlog - Local, single-user expense tracker for the terminal
//!
//! This library provides the core functionality for the spendlog CLI:
//! an ordered ledger of expense records persisted to a single JSON file,
//! with aggregate reporting by category, total, and daily/monthly series.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, the ledger)
//! - `storage`: JSON file storage layer
//! - `reports`: Pure aggregation functions over the ledger
//! - `display`: Terminal formatting
//! - `audit`: Append-only audit log of ledger mutations
//! - `shell`: Interactive menu loop

pub mod audit;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod shell;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
