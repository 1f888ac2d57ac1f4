//! Configuration module for the expense ledger
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings (currency symbol, date format, categories)

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
