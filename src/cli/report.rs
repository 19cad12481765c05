//! CLI commands for reports
//!
//! The category summary and the audit history.

use crate::error::LedgerResult;
use crate::session::Session;

use super::expense::print_currency_hint;

/// Handle `expense summary`
pub fn handle_summary(session: &Session) -> LedgerResult<()> {
    let summary = session.summary()?;

    if summary.is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }

    print!("{}", summary.format_terminal(session.currency()));
    print_currency_hint(session);
    Ok(())
}

/// Handle `expense history`
pub fn handle_history(session: &Session, limit: usize) -> LedgerResult<()> {
    let entries = session.storage().audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
