//! Interactive session context
//!
//! A [`Session`] bundles the ledger with the filter the user is currently
//! looking through. The presentation layer owns one and passes it around
//! explicitly; there is no process-wide ledger.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::ExpenseResult;
use crate::models::{CategorySet, ExpenseRecord, Money, NewExpense};
use crate::services::{aggregate, CategorySummary, FilterSpec, Ledger};

/// Ledger plus view state for one user session
#[derive(Debug, Clone, Default)]
pub struct Session {
    ledger: Ledger,
    filter: FilterSpec,
}

impl Session {
    /// Start a session with an empty ledger over the given categories
    pub fn new(categories: CategorySet) -> Self {
        Self {
            ledger: Ledger::with_categories(categories),
            filter: FilterSpec::default(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn categories(&self) -> &CategorySet {
        self.ledger.categories()
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Add an expense to the ledger
    pub fn add(&mut self, input: NewExpense) -> ExpenseResult<&ExpenseRecord> {
        self.ledger.add(input)
    }

    /// Remove the expense shown at `index` (0-based) of the current view
    pub fn remove_visible(&mut self, index: usize) -> ExpenseResult<ExpenseRecord> {
        self.ledger.remove_visible(&self.filter, index)
    }

    /// Records that pass the current filter
    pub fn visible(&self) -> Vec<&ExpenseRecord> {
        self.ledger.filter(&self.filter)
    }

    /// Category breakdown of the current view
    pub fn summary(&self) -> ExpenseResult<CategorySummary> {
        aggregate(self.visible())
    }

    /// Running total of the whole ledger, regardless of the filter
    pub fn total(&self) -> Money {
        self.ledger.total()
    }

    /// Restrict the view to one category, or lift the restriction with `None`
    pub fn set_category_filter(&mut self, name: Option<&str>) -> ExpenseResult<()> {
        self.filter.category = match name {
            Some(name) => Some(self.ledger.categories().require(name)?.clone()),
            None => None,
        };
        debug!(filter = %self.filter, "filter changed");
        Ok(())
    }

    pub fn set_from(&mut self, from: Option<NaiveDate>) {
        self.filter.date_range.from = from;
        debug!(filter = %self.filter, "filter changed");
    }

    pub fn set_to(&mut self, to: Option<NaiveDate>) {
        self.filter.date_range.to = to;
        debug!(filter = %self.filter, "filter changed");
    }

    pub fn clear_filter(&mut self) {
        self.filter = FilterSpec::default();
        debug!("filter cleared");
    }
}
