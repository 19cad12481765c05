//! Expense store backed by a delimited text file
//!
//! The file starts with the header `date,description,category,amount` and
//! holds one row per record in append order. Rows are only ever appended.

use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::MalformedRowPolicy;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, ExpenseRecord};

use super::file_io::{open_for_append, read_bytes_optional};

/// Column names, in the order they are written
pub const HEADER: [&str; 4] = ["date", "description", "category", "amount"];

/// A row that could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRow {
    /// 1-based line number in the file
    pub line: u64,
    pub reason: String,
}

impl From<MalformedRow> for LedgerError {
    fn from(row: MalformedRow) -> Self {
        LedgerError::MalformedRow {
            line: row.line,
            reason: row.reason,
        }
    }
}

/// Result of parsing the whole store
#[derive(Debug, Clone, Default)]
pub struct LedgerLoad {
    pub records: Vec<ExpenseRecord>,
    pub skipped: Vec<MalformedRow>,
}

/// Repository for expense persistence
pub struct ExpenseStore {
    path: PathBuf,
    policy: MalformedRowPolicy,
}

impl ExpenseStore {
    /// Create a new expense store
    pub fn new(path: PathBuf, policy: MalformedRowPolicy) -> Self {
        Self { path, policy }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load all records, applying the configured malformed-row policy
    ///
    /// A missing file is an empty ledger.
    pub fn load_all(&self) -> LedgerResult<Vec<ExpenseRecord>> {
        let load = self.load_report()?;

        match self.policy {
            MalformedRowPolicy::Fail => {
                if let Some(row) = load.skipped.into_iter().next() {
                    return Err(row.into());
                }
            }
            MalformedRowPolicy::Skip => {
                for row in &load.skipped {
                    warn!(line = row.line, reason = %row.reason, "skipping malformed expense row");
                }
            }
        }

        Ok(load.records)
    }

    /// Parse the store, collecting every bad row instead of failing on it
    ///
    /// A header without one of the expected columns fails the whole load.
    /// Rows are decoded one at a time, so a row with invalid UTF-8 is just
    /// another malformed row.
    pub fn load_report(&self) -> LedgerResult<LedgerLoad> {
        let contents = match read_bytes_optional(&self.path)? {
            Some(bytes) if !is_blank(&bytes) => bytes,
            _ => return Ok(LedgerLoad::default()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(contents.as_slice());

        let headers = reader.headers()?.clone();
        let mut columns = [0usize; 4];
        for (slot, name) in columns.iter_mut().zip(HEADER) {
            *slot = headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| {
                    LedgerError::Storage(format!(
                        "{} is missing the '{}' column",
                        self.path.display(),
                        name
                    ))
                })?;
        }

        let mut load = LedgerLoad::default();
        for result in reader.byte_records() {
            let raw = match result {
                Ok(raw) => raw,
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(0);
                    load.skipped.push(MalformedRow {
                        line,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let line = raw.position().map(|p| p.line()).unwrap_or(0);
            let record = match csv::StringRecord::from_byte_record(raw) {
                Ok(record) => record,
                Err(e) => {
                    load.skipped.push(MalformedRow {
                        line,
                        reason: e.utf8_error().to_string(),
                    });
                    continue;
                }
            };

            if record.len() != headers.len() {
                load.skipped.push(MalformedRow {
                    line,
                    reason: format!(
                        "expected {} fields, found {}",
                        headers.len(),
                        record.len()
                    ),
                });
                continue;
            }

            let field = |i: usize| record.get(columns[i]).unwrap_or_default();
            match parse_row(field(0), field(1), field(2), field(3)) {
                Ok(expense) => load.records.push(expense),
                Err(reason) => load.skipped.push(MalformedRow { line, reason }),
            }
        }

        debug!(
            records = load.records.len(),
            skipped = load.skipped.len(),
            path = %self.path.display(),
            "loaded expenses"
        );

        Ok(load)
    }

    /// Append one record, returning the 1-based line it was written to
    ///
    /// The record is validated first; on failure nothing is written. Prior
    /// rows are never rewritten or decoded.
    pub fn append(&self, record: &ExpenseRecord) -> LedgerResult<u64> {
        record.validate()?;

        let existing = read_bytes_optional(&self.path)?.unwrap_or_default();
        let needs_header = is_blank(&existing);
        let line = next_line(&existing) + u64::from(needs_header);

        let file = open_for_append(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);

        if needs_header {
            writer.write_record(HEADER)?;
        }

        let amount = record.amount.to_string();
        writer.write_record([
            record.date.as_str(),
            record.description.as_str(),
            record.category.as_str(),
            amount.as_str(),
        ])?;

        writer
            .flush()
            .map_err(|e| LedgerError::Storage(format!("Failed to write expense: {}", e)))?;

        debug!(line, category = %record.category, amount = %record.amount, "appended expense");
        Ok(line)
    }

    /// Write just the header if the store doesn't exist yet
    pub fn ensure_header(&self) -> LedgerResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        let mut file = open_for_append(&self.path)?;
        writeln!(file, "{}", HEADER.join(","))
            .map_err(|e| LedgerError::Storage(format!("Failed to write header: {}", e)))?;
        Ok(())
    }
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

/// Line a new row lands on, counting the newline `open_for_append` adds to an
/// unterminated last line
fn next_line(existing: &[u8]) -> u64 {
    let newlines = existing.iter().filter(|&&b| b == b'\n').count() as u64;
    let unterminated = existing.last().is_some_and(|&b| b != b'\n');
    newlines + u64::from(unterminated) + 1
}

fn parse_row(
    date: &str,
    description: &str,
    category: &str,
    amount: &str,
) -> Result<ExpenseRecord, String> {
    let amount =
        Amount::parse(amount).map_err(|e| format!("invalid amount: {}", e))?;

    let record = ExpenseRecord {
        date: date.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        amount,
    };
    record.validate().map_err(|e| match e {
        LedgerError::Validation(message) => message,
        other => other.to_string(),
    })?;

    Ok(record)
}
