//! Core data models for the expense ledger
//!
//! This module contains the data structures of the ledger domain: amounts,
//! expense records and the category vocabulary.

pub mod amount;
pub mod expense;
pub mod vocabulary;

pub use amount::{Amount, AmountParseError};
pub use expense::{ExpenseInput, ExpenseRecord};
pub use vocabulary::{CategoryVocabulary, DEFAULT_CATEGORIES};
