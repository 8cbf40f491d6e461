//! Audit logging for ledger mutations
//!
//! Every add/edit/delete appends one JSONL entry with before/after
//! snapshots, giving a recoverable history of what changed and when.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
