//! Category summary
//!
//! Aggregates a set of expenses into per-category subtotals with their share
//! of the grand total.

use std::collections::HashMap;

use crate::display::format::{format_amount, format_bar, format_percentage};
use crate::models::{Amount, ExpenseRecord};

/// Width of the share bar in terminal output
const BAR_WIDTH: usize = 30;

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub subtotal: Amount,
    /// Number of records in this category
    pub count: usize,
    /// Share of the grand total, 0-100
    pub percentage: f64,
}

/// Summary of a record set
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub grand_total: Amount,
    /// Sorted by subtotal, largest first; equal subtotals keep the order in
    /// which their category first appeared
    pub entries: Vec<CategoryTotal>,
}

/// Aggregate records by category
///
/// Only categories that actually have records appear in the result.
pub fn summarize(records: &[ExpenseRecord]) -> Summary {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<CategoryTotal> = Vec::new();

    for record in records {
        let slot = *index.entry(record.category.as_str()).or_insert_with(|| {
            entries.push(CategoryTotal {
                category: record.category.clone(),
                subtotal: Amount::zero(),
                count: 0,
                percentage: 0.0,
            });
            entries.len() - 1
        });

        let entry = &mut entries[slot];
        entry.subtotal += record.amount;
        entry.count += 1;
    }

    let grand_total: Amount = records.iter().map(|r| r.amount).sum();

    for entry in &mut entries {
        entry.percentage = entry.subtotal.percentage_of(grand_total);
    }

    // Stable, so ties stay in first-seen order
    entries.sort_by(|a, b| b.subtotal.cmp(&a.subtotal));

    Summary {
        grand_total,
        entries,
    }
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("Expense Summary\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total: {}\n\n",
            format_amount(self.grand_total, currency)
        ));

        for entry in &self.entries {
            output.push_str(&format!(
                "{}\n  {} ({})\n  {}\n",
                entry.category,
                format_amount(entry.subtotal, currency),
                format_percentage(entry.percentage),
                format_bar(entry.percentage, 100.0, BAR_WIDTH)
            ));
        }

        output
    }
}
