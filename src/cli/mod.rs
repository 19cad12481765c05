//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session.

pub mod category;
pub mod currency;
pub mod expense;
pub mod report;

pub use category::{handle_category_command, CategoryCommands};
pub use currency::{handle_currency_command, CurrencyCommands};
pub use expense::{handle_add, handle_list, AddArgs};
pub use report::{handle_history, handle_summary};
