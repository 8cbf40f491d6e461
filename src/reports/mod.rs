//! Aggregation reports over the expense ledger
//!
//! A stateless compute layer: every function takes the expense sequence by
//! reference and returns a derived summary.

pub mod spending;

pub use spending::{categories, spending_by_day, spending_by_month, total, total_by_category};
