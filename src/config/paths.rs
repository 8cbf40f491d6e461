//! Path management for spendlog
//!
//! Provides platform-appropriate path resolution for the expense file,
//! settings, and audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDLOG_DATA_DIR` environment variable (if set)
//! 2. The platform data directory via `directories::ProjectDirs`
//!    (e.g. `~/.local/share/spendlog` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Manages all paths used by spendlog
#[derive(Debug, Clone)]
pub struct DataPaths {
    /// Base directory for all spendlog data
    base_dir: PathBuf,
}

impl DataPaths {
    /// Create a new DataPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = if let Ok(custom) = std::env::var("SPENDLOG_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "spendlog").ok_or_else(|| {
                ExpenseError::Config("Could not determine a home directory".into())
            })?;
            dirs.data_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create DataPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))?;
        Ok(())
    }
}
