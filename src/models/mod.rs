//! Core data models for the expense ledger
//!
//! This module contains the data structures of the expense domain: records,
//! amounts, identifiers and the category set.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{Category, CategorySet, DEFAULT_CATEGORIES};
pub use expense::{ExpenseField, ExpenseRecord, ExpenseValidationError, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError, CURRENCY_SYMBOLS};
