//! Change history for the ledger
//!
//! One JSON object per line, appended after each successful mutation. The
//! file is never rewritten, so `expense history` can always be replayed from
//! it.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::storage::file_io::read_optional;

use super::entry::AuditEntry;

/// Appends to and reads back the change history file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Record one change
    ///
    /// The entry is serialized before the file is touched, and written with a
    /// single call so a line is never split between two entries.
    pub fn log(&self, entry: &AuditEntry) -> LedgerResult<()> {
        let mut line = serde_json::to_string(entry)
            .map_err(|e| LedgerError::Json(format!("Cannot encode change record: {}", e)))?;
        line.push('\n');

        let history_error = |e: std::io::Error| {
            LedgerError::Storage(format!(
                "Cannot record change in {}: {}",
                self.log_path.display(),
                e
            ))
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(history_error)?;
        file.write_all(line.as_bytes()).map_err(history_error)?;
        file.flush().map_err(history_error)
    }

    /// Every recorded change, oldest first; no history file means no changes
    pub fn read_all(&self) -> LedgerResult<Vec<AuditEntry>> {
        let Some(contents) = read_optional(&self.log_path)? else {
            return Ok(Vec::new());
        };

        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    LedgerError::Json(format!(
                        "Change history line {} is unreadable: {}",
                        index + 1,
                        e
                    ))
                })
            })
            .collect()
    }

    /// The last `count` changes, oldest first
    pub fn read_recent(&self, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
