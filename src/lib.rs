//! Expense Ledger - record, filter and summarize expenses for one session
//!
//! The library keeps an in-memory ledger of expense records and derives two
//! views from it: the records passing a category/date filter, and a
//! per-category breakdown of those records. Nothing is persisted; a ledger
//! lives exactly as long as the [`Session`] that owns it.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense records, amounts, ids and the category set
//! - `services`: The ledger, the view filter and the category aggregation
//! - `session`: Ledger plus current filter, owned by the caller
//! - `display`: Terminal formatting
//! - `cli`: The interactive command loop
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use expense_ledger::models::{CategorySet, Money, NewExpense};
//! use expense_ledger::services::{aggregate, FilterSpec, Ledger};
//!
//! let mut ledger = Ledger::with_categories(CategorySet::default());
//! let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! ledger.add(NewExpense::new("Lunch", Money::from_units(12), "Food", date, "Soup"))?;
//!
//! let visible = ledger.filter(&FilterSpec::new().from(date));
//! let summary = aggregate(visible)?;
//! assert_eq!(summary.labels(), vec!["Food"]);
//! assert_eq!(ledger.total(), Money::from_units(12));
//! # Ok::<(), expense_ledger::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;

pub use error::{ExpenseError, ExpenseResult};
pub use session::Session;
