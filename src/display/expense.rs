//! Expense list formatting
//!
//! Renders the visible expenses as a table. The `#` column is 1-based and is
//! the number the `remove` command expects.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::ExpenseRecord;

use super::format::truncate;

const DESCRIPTION_WIDTH: usize = 32;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format the visible expenses as a table
pub fn format_expense_list(records: &[&ExpenseRecord], settings: &Settings) -> String {
    if records.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = records.iter().enumerate().map(|(i, record)| ExpenseRow {
        position: i + 1,
        name: record.name().to_string(),
        amount: record.amount().format_with_symbol(&settings.currency_symbol),
        category: record.category().to_string(),
        date: record.date().format(&settings.date_format).to_string(),
        description: truncate(record.description(), DESCRIPTION_WIDTH),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

/// One-line confirmation after an add or remove
pub fn format_expense_short(record: &ExpenseRecord, settings: &Settings) -> String {
    format!(
        "{} {} {} ({})",
        record.date().format(&settings.date_format),
        record.name(),
        record.amount().format_with_symbol(&settings.currency_symbol),
        record.category()
    )
}
