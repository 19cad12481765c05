//! Expense Ledger - record and summarize personal expenses
//!
//! This library keeps a ledger of dated, categorized expenses in a flat
//! delimited file, a category vocabulary and a currency label in small text
//! files, and aggregates the ledger into per-category totals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Amounts, expense records, the category vocabulary
//! - `storage`: Flat-file stores for expenses, categories and currency
//! - `reports`: The category summary
//! - `session`: Context object the presentation layer holds between actions
//! - `audit`: Append-only log of mutations
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expense` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::LedgerPaths;
//! use expense_ledger::session::Session;
//!
//! let mut session = Session::open(LedgerPaths::resolve(None)?)?;
//! let summary = session.summary()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod session;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use session::Session;
