//! Expense record model
//!
//! An expense is a dated, categorized, positive amount. Records are immutable
//! once written and have no identifier beyond their position in the ledger.

use serde::{Deserialize, Serialize};

use super::amount::{Amount, AmountParseError};
use crate::error::{LedgerError, LedgerResult};

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Date of the expense, usually `YYYY-MM-DD`; only checked for presence
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: Amount,
}

impl ExpenseRecord {
    /// Build a record, validating every field
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Amount,
    ) -> LedgerResult<Self> {
        let record = Self {
            date: date.into(),
            description: description.into(),
            category: category.into(),
            amount,
        };
        record.validate()?;
        Ok(record)
    }

    /// Check that all text fields are present and the amount is positive
    pub fn validate(&self) -> LedgerResult<()> {
        let fields = [
            ("date", &self.date),
            ("description", &self.description),
            ("category", &self.category),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(LedgerError::validation(format!("The {} field is required", name)));
            }
        }

        if !self.amount.is_positive() {
            return Err(LedgerError::validation(
                "Amount must be a positive number",
            ));
        }

        if self.amount > Amount::MAX {
            return Err(LedgerError::validation(format!(
                "Amount must not exceed {}",
                Amount::MAX
            )));
        }

        Ok(())
    }
}

/// Raw form input for a new expense, before validation
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: String,
}

impl ExpenseInput {
    /// Validate the raw strings and turn them into a record
    ///
    /// Missing fields are reported before the amount is parsed.
    pub fn into_record(self) -> LedgerResult<ExpenseRecord> {
        let missing = [&self.date, &self.description, &self.category, &self.amount]
            .iter()
            .any(|field| field.trim().is_empty());
        if missing {
            return Err(LedgerError::validation("All fields are required"));
        }

        let amount = Amount::parse(&self.amount).map_err(|e| match e {
            AmountParseError::Overflow(_) => {
                LedgerError::validation(format!("Amount must not exceed {}", Amount::MAX))
            }
            _ => LedgerError::validation("Amount must be a positive number"),
        })?;

        ExpenseRecord::new(self.date, self.description, self.category, amount)
    }
}
