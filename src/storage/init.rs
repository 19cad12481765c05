//! Storage initialization
//!
//! Handles first-run setup: the expense file with its header, the seeded
//! category vocabulary and an empty currency file.

use tracing::info;

use crate::config::{LedgerPaths, MalformedRowPolicy};
use crate::error::LedgerError;
use crate::models::CategoryVocabulary;

use super::categories::CategoryStore;
use super::expenses::ExpenseStore;
use super::file_io::write_atomic;

/// Initialize storage for a fresh installation
///
/// Only missing files are created; existing data is never overwritten.
pub fn initialize_storage(paths: &LedgerPaths) -> Result<(), LedgerError> {
    paths.ensure_directories()?;

    if !paths.expenses_file().exists() {
        ExpenseStore::new(paths.expenses_file(), MalformedRowPolicy::default()).ensure_header()?;
        info!(path = %paths.expenses_file().display(), "created expense store");
    }

    if !paths.categories_file().exists() {
        CategoryStore::new(paths.categories_file()).save(&CategoryVocabulary::default())?;
        info!(path = %paths.categories_file().display(), "seeded categories");
    }

    if !paths.currency_file().exists() {
        write_atomic(paths.currency_file(), b"")?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &LedgerPaths) -> bool {
    !paths.expenses_file().exists()
        || !paths.categories_file().exists()
        || !paths.currency_file().exists()
}
