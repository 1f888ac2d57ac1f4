//! Spending breakdown formatting
//!
//! A text stand-in for the pie chart: one line per category with its share,
//! a bar, and the colour its slice gets in a rendered chart.

use crate::config::Settings;
use crate::models::Money;
use crate::services::{CategorySummary, DEFAULT_PALETTE};

use super::format::truncate;

const BAR_WIDTH: usize = 20;
const LABEL_WIDTH: usize = 16;
const RULE_WIDTH: usize = LABEL_WIDTH + BAR_WIDTH + 32;

/// Format a category breakdown
pub fn format_summary(summary: &CategorySummary, settings: &Settings) -> String {
    if summary.is_empty() {
        return "No expenses to summarize.\n".to_string();
    }

    let slices = summary.chart_slices(&DEFAULT_PALETTE);
    let max_value = slices.iter().map(|s| s.value).fold(0.0, f64::max);
    let symbol = &settings.currency_symbol;
    let rule = "─".repeat(RULE_WIDTH);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<label$} {:>12} {:>7}  {:<bar$} {}\n",
        "Category",
        "Amount",
        "Share",
        "",
        "Colour",
        label = LABEL_WIDTH,
        bar = BAR_WIDTH
    ));
    output.push_str(&rule);
    output.push('\n');

    for (entry, slice) in summary.iter().zip(&slices) {
        output.push_str(&format!(
            "{:<label$} {:>12} {:>7}  {} {}\n",
            truncate(entry.category.name(), LABEL_WIDTH),
            entry.total.format_with_symbol(symbol),
            percent(slice.percentage),
            bar(slice.value, max_value),
            slice.color,
            label = LABEL_WIDTH
        ));
    }

    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format_total_line("Total", summary.total(), symbol));
    output
}

/// Format a labelled total
pub fn format_total_line(label: &str, amount: Money, symbol: &str) -> String {
    format!(
        "{:<label$} {:>12}\n",
        label,
        amount.format_with_symbol(symbol),
        label = LABEL_WIDTH
    )
}

/// Share of the total, with an extra digit for slivers
fn percent(share: f64) -> String {
    match share {
        s if s > 0.0 && s < 0.1 => format!("{:.2}%", s),
        s if s < 10.0 => format!("{:.1}%", s),
        s => format!("{:.0}%", s),
    }
}

/// Bar scaled against the largest slice
fn bar(value: f64, largest: f64) -> String {
    let filled = if largest > 0.0 && value > 0.0 {
        ((value / largest) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    }
    .min(BAR_WIDTH);

    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(BAR_WIDTH - filled));
    bar
}
