//! Expense categories
//!
//! Categories come from a fixed set that is chosen once per session. The add
//! form and the filter both resolve names against the same [`CategorySet`], so
//! the options they offer can never drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};

/// The categories offered when no configuration overrides them
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Food",
    "Transportation",
    "Entertainment",
    "Shopping",
    "Rent",
    "Utilities",
    "Other",
];

/// A category name in its canonical spelling
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Get the category name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The enumerated set of categories available during a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySet {
    categories: Vec<Category>,
}

impl CategorySet {
    /// Build a set from configured names
    ///
    /// Names are trimmed. The set must be non-empty, and names must be
    /// non-blank and unique ignoring case.
    pub fn new<I, S>(names: I) -> ExpenseResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut categories: Vec<Category> = Vec::new();

        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(ExpenseError::Config(
                    "Category names cannot be blank".into(),
                ));
            }
            if categories.iter().any(|c| c.0.eq_ignore_ascii_case(name)) {
                return Err(ExpenseError::Config(format!(
                    "Duplicate category: {}",
                    name
                )));
            }
            categories.push(Category(name.to_string()));
        }

        if categories.is_empty() {
            return Err(ExpenseError::Config(
                "At least one category must be configured".into(),
            ));
        }

        Ok(Self { categories })
    }

    /// Look up a category by name, ignoring case and surrounding whitespace
    pub fn resolve(&self, name: &str) -> Option<&Category> {
        let name = name.trim();
        self.categories
            .iter()
            .find(|c| c.0.eq_ignore_ascii_case(name))
    }

    /// Like [`resolve`](Self::resolve) but reports unknown names as errors
    pub fn require(&self, name: &str) -> ExpenseResult<&Category> {
        self.resolve(name)
            .ok_or_else(|| ExpenseError::category_not_found(name.trim()))
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category names in configured order
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(Category::name).collect()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|name| Category(name.to_string()))
                .collect(),
        }
    }
}
