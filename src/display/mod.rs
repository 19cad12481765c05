//! Display formatting for terminal output
//!
//! Turns ledger data into the text the CLI prints: the expense table,
//! amounts with their currency suffix, percentages and share bars.

pub mod expense;
pub mod format;

pub use expense::format_expense_table;
pub use format::{format_amount, format_bar, format_percentage, truncate};
