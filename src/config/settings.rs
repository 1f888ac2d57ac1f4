//! User settings for the expense ledger
//!
//! Settings hold presentation preferences and the category set offered for
//! the session. They are read once at startup; nothing in a session writes
//! them back.

use std::fmt::Write as _;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CategorySet, DEFAULT_CATEGORIES};

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Prefix used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display and input (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Categories offered for new expenses and filters
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Tracing filter directive, e.g. "expense_ledger=debug"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            categories: default_categories(),
            log_filter: None,
        }
    }
}

impl Settings {
    /// Load settings from the default location, or defaults if there is no file
    pub fn load_or_create(paths: &ExpensePaths) -> ExpenseResult<Self> {
        Self::load_from(&paths.settings_file())
    }

    /// Load settings from an explicit file, or defaults if it does not exist
    pub fn load_from(path: &Path) -> ExpenseResult<Self> {
        if !path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to the default location
    pub fn save(&self, paths: &ExpensePaths) -> ExpenseResult<()> {
        paths.ensure_directories()?;
        self.save_to(&paths.settings_file())
    }

    /// Save settings to an explicit file
    pub fn save_to(&self, path: &Path) -> ExpenseResult<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Build the category set for a session
    pub fn category_set(&self) -> ExpenseResult<CategorySet> {
        CategorySet::new(&self.categories)
    }

    /// Check the values that would otherwise fail later, mid-session
    pub fn validate(&self) -> ExpenseResult<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ExpenseError::Config(format!(
                "Invalid date format: {}",
                self.date_format
            )));
        }

        // Time fields parse fine but cannot be rendered for a plain date
        let mut sample = String::new();
        if write!(sample, "{}", NaiveDate::MIN.format(&self.date_format)).is_err() {
            return Err(ExpenseError::Config(format!(
                "Date format cannot be applied to a date: {}",
                self.date_format
            )));
        }
        self.category_set().map(|_| ())
    }
}
