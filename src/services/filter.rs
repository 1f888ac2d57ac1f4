//! View filter
//!
//! Derives the visible subsequence of the ledger from a [`FilterSpec`]. The
//! filter never reorders records and never mutates anything.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Category, ExpenseRecord};

/// Optional date bounds, both inclusive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Check whether a date falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// What the user currently wants to see
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Only records of this category
    pub category: Option<Category>,
    /// Only records dated inside this range
    pub date_range: DateRange,
}

impl FilterSpec {
    /// Create a filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by lower date bound
    pub fn from(mut self, from: NaiveDate) -> Self {
        self.date_range.from = Some(from);
        self
    }

    /// Filter by upper date bound
    pub fn to(mut self, to: NaiveDate) -> Self {
        self.date_range.to = Some(to);
        self
    }

    /// Check whether a record passes every clause of the filter
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        self.category
            .as_ref()
            .map_or(true, |category| record.category() == category)
            && self.date_range.contains(record.date())
    }

    /// True when at least one clause constrains the view
    pub fn is_active(&self) -> bool {
        self.category.is_some() || !self.date_range.is_unbounded()
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = self
            .category
            .as_ref()
            .map_or_else(|| "any".to_string(), ToString::to_string);
        let bound = |d: Option<NaiveDate>| d.map_or_else(|| "any".to_string(), |d| d.to_string());
        write!(
            f,
            "category: {}, from: {}, to: {}",
            category,
            bound(self.date_range.from),
            bound(self.date_range.to)
        )
    }
}

/// Select the records that match `spec`, keeping ledger order
pub fn filter<'a, I>(records: I, spec: &FilterSpec) -> Vec<&'a ExpenseRecord>
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    records
        .into_iter()
        .filter(|record| spec.matches(record))
        .collect()
}
