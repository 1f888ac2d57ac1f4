//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and breakdowns for terminal
//! display. Currency symbols and date formats come from the settings.

pub mod expense;
pub mod format;
pub mod summary;

pub use expense::{format_expense_list, format_expense_short};
pub use summary::{format_summary, format_total_line};
