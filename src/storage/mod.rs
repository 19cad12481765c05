//! Storage layer for the expense ledger
//!
//! Flat text files: a delimited expense store that is only appended to, plus
//! small category and currency files that are rewritten atomically.

pub mod categories;
pub mod currency;
pub mod expenses;
pub mod file_io;
pub mod init;

pub use categories::{AddCategory, CategoryStore};
pub use currency::CurrencyStore;
pub use expenses::{ExpenseStore, LedgerLoad, MalformedRow};
pub use init::{initialize_storage, needs_initialization};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerError;

/// Main storage coordinator that provides access to all stores
pub struct Storage {
    paths: LedgerPaths,
    pub expenses: ExpenseStore,
    pub categories: CategoryStore,
    pub currency: CurrencyStore,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths, settings: &Settings) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseStore::new(paths.expenses_file(), settings.malformed_rows),
            categories: CategoryStore::new(paths.categories_file()),
            currency: CurrencyStore::new(paths.currency_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a successful mutation in the audit log
    pub fn log_audit(&self, entry: &AuditEntry) -> Result<(), LedgerError> {
        self.audit.log(entry)
    }
}
