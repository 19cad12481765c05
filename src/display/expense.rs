//! Expense table formatting
//!
//! Renders the ledger as a table with a running total line underneath.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::format::{format_amount, truncate};
use crate::models::{Amount, ExpenseRecord};

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format all expenses as a table followed by the total
pub fn format_expense_table(records: &[ExpenseRecord], currency: Option<&str>) -> String {
    let total: Amount = records.iter().map(|r| r.amount).sum();
    let total_line = format!("Total Expenses: {}\n", format_amount(total, currency));

    if records.is_empty() {
        return format!("No expenses recorded yet.\n{}", total_line);
    }

    let rows = records.iter().map(|r| ExpenseRow {
        date: r.date.clone(),
        description: truncate(&r.description, DESCRIPTION_WIDTH),
        category: r.category.clone(),
        amount: format_amount(r.amount, currency),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(3), Alignment::right());

    format!("{}\n{}", table, total_line)
}
