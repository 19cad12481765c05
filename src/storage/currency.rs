//! Currency label repository
//!
//! A single line holding a free-text currency code, or nothing when unset.

use std::path::PathBuf;

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};

use super::file_io::{read_optional, write_atomic};

/// Repository for the currency label
pub struct CurrencyStore {
    path: PathBuf,
}

impl CurrencyStore {
    /// Create a new currency store
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the label; missing or empty file means unset
    pub fn load(&self) -> LedgerResult<Option<String>> {
        let Some(contents) = read_optional(&self.path)? else {
            return Ok(None);
        };

        let label = contents
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(contents.as_str());

        if label.is_empty() {
            Ok(None)
        } else {
            Ok(Some(label.to_string()))
        }
    }

    /// Replace the label unconditionally; an empty code clears it
    pub fn set(&self, code: &str) -> LedgerResult<()> {
        if code.contains(['\n', '\r']) {
            return Err(LedgerError::validation(
                "Currency cannot contain line breaks",
            ));
        }

        write_atomic(&self.path, code.as_bytes())?;
        debug!(currency = code, "set currency");
        Ok(())
    }
}
