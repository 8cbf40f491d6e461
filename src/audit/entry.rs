//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Expense;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense was added
    Add,
    /// Expense was edited
    Edit,
    /// Expense was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "ADD"),
            Operation::Edit => write!(f, "EDIT"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one mutation of the ledger with before/after snapshots. The
/// position is the record's 1-based display position at the time of the
/// operation; it is not a stable identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// 1-based display position of the affected record
    pub position: usize,

    /// The record before the operation (for edits and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Expense>,

    /// The record after the operation (for adds and edits)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Expense>,
}

impl AuditEntry {
    /// Entry for a newly added expense
    pub fn added(position: usize, expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Add,
            position,
            before: None,
            after: Some(expense.clone()),
        }
    }

    /// Entry for an edited expense
    pub fn edited(position: usize, before: &Expense, after: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Edit,
            position,
            before: Some(before.clone()),
            after: Some(after.clone()),
        }
    }

    /// Entry for a deleted expense
    pub fn deleted(position: usize, expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            position,
            before: Some(expense.clone()),
            after: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expense() -> Expense {
        Expense::new(
            Money::from_cents(1250),
            "Food",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_added_entry() {
        let entry = AuditEntry::added(1, &expense());
        assert_eq!(entry.operation, Operation::Add);
        assert!(entry.before.is_none());
        assert_eq!(entry.after.as_ref().unwrap().category, "Food");
    }

    #[test]
    fn test_deleted_entry() {
        let entry = AuditEntry::deleted(3, &expense());
        assert_eq!(entry.operation, Operation::Delete);
        assert_eq!(entry.position, 3);
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization_skips_absent_snapshots() {
        let entry = AuditEntry::added(1, &expense());
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("before"));
        assert!(json.contains("\"operation\":\"add\""));
    }
}
