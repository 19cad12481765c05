//! Path management for the expense ledger
//!
//! All ledger files live in a single base directory.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory passed by the caller (the `--data-dir` flag)
//! 2. The platform data directory reported by `directories`
//!    (e.g. `~/.local/share/expense-ledger` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Manages all paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Base directory for all ledger data
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve paths, preferring an explicit base directory when one is given
    ///
    /// # Errors
    ///
    /// Returns an error if no explicit directory is given and the platform
    /// data directory cannot be determined.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, LedgerError> {
        let base_dir = match explicit {
            Some(dir) => dir,
            None => default_base_dir()?,
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the expense store
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.csv")
    }

    /// Get the path to the category vocabulary
    pub fn categories_file(&self) -> PathBuf {
        self.base_dir.join("categories.txt")
    }

    /// Get the path to the currency label
    pub fn currency_file(&self) -> PathBuf {
        self.base_dir.join("currency.txt")
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
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Check if the ledger has been initialized (expense store exists)
    pub fn is_initialized(&self) -> bool {
        self.expenses_file().exists()
    }
}

fn default_base_dir() -> Result<PathBuf, LedgerError> {
    ProjectDirs::from("", "", "expense-ledger")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| LedgerError::Config("Could not determine a data directory".into()))
}
