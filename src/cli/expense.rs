//! Expense CLI commands
//!
//! Adding expenses and listing the ledger.

use clap::Args;

use crate::config::MalformedRowPolicy;
use crate::display::format_expense_table;
use crate::error::LedgerResult;
use crate::models::ExpenseInput;
use crate::session::Session;

/// Arguments for `expense add`
#[derive(Args)]
pub struct AddArgs {
    /// Amount spent (e.g. "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// What the money was spent on
    pub description: String,

    /// Category name (defaults to the first category)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Expense date (defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Handle `expense add`
pub fn handle_add(session: &mut Session, args: AddArgs) -> LedgerResult<()> {
    let category = args
        .category
        .or_else(|| session.vocabulary().iter().next().map(str::to_string))
        .unwrap_or_default();
    let date = match args.date {
        Some(date) => date,
        None => session.settings().today()?,
    };

    let input = ExpenseInput {
        date,
        description: args.description,
        category,
        amount: args.amount,
    };

    let record = session.add_expense(input)?;
    println!("Expense added successfully!");
    println!(
        "  {}  {}  {}  {}",
        record.date,
        record.description,
        record.category,
        session.format_amount(record.amount)
    );

    print_currency_hint(session);
    Ok(())
}

/// Handle `expense list`
pub fn handle_list(session: &Session) -> LedgerResult<()> {
    let records = match session.settings().malformed_rows {
        MalformedRowPolicy::Fail => session.expenses()?,
        MalformedRowPolicy::Skip => {
            let load = session.expenses_with_report()?;
            for row in &load.skipped {
                eprintln!("Skipped line {}: {}", row.line, row.reason);
            }
            load.records
        }
    };

    print!("{}", format_expense_table(&records, session.currency()));

    print_currency_hint(session);
    Ok(())
}

/// Remind the user to pick a currency until one is set
pub(crate) fn print_currency_hint(session: &Session) {
    if session.needs_currency() {
        eprintln!("Hint: no currency set. Run 'expense currency set <CODE>' (e.g. USD, EUR, INR).");
    }
}
