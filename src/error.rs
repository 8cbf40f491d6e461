//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for expense records
    #[error("Validation error: {0}")]
    Validation(String),

    /// Out-of-range edit/delete target
    #[error("Invalid selection: no expense at position {position} (have {len})")]
    InvalidIndex { position: usize, len: usize },

    /// The expense file exists but could not be parsed
    #[error("Expense file is corrupt: {0}")]
    CorruptState(String),

    /// Audit log errors
    #[error("Audit error: {0}")]
    Audit(String),
}

impl ExpenseError {
    /// Create an index error from a 0-based storage index
    pub fn invalid_index(index: usize, len: usize) -> Self {
        Self::InvalidIndex {
            position: index + 1,
            len,
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an out-of-range selection
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for spendlog operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Validation("amount must be positive".into());
        assert_eq!(err.to_string(), "Validation error: amount must be positive");
    }

    #[test]
    fn test_invalid_index_error() {
        let err = ExpenseError::invalid_index(4, 3);
        assert_eq!(
            err.to_string(),
            "Invalid selection: no expense at position 5 (have 3)"
        );
        assert!(err.is_invalid_index());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let expense_err: ExpenseError = io_err.into();
        assert!(matches!(expense_err, ExpenseError::Io(_)));
    }
}
