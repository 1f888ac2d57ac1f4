//! Expense record model
//!
//! An [`ExpenseRecord`] is created from a [`NewExpense`] once every field has
//! been supplied, and never changes afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, CategorySet};
use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    id: ExpenseId,
    name: String,
    amount: Money,
    category: Category,
    date: NaiveDate,
    description: String,
}

impl ExpenseRecord {
    /// Validate the candidate fields and build a record
    ///
    /// Every field must be present. Text fields count as missing when they are
    /// blank, and an amount of zero is present. The category has to belong to
    /// `categories`.
    pub fn create(
        input: NewExpense,
        categories: &CategorySet,
    ) -> Result<Self, ExpenseValidationError> {
        let missing = input.missing_fields();
        if !missing.is_empty() {
            return Err(ExpenseValidationError::MissingFields(missing));
        }

        let category = categories
            .resolve(&input.category)
            .cloned()
            .ok_or_else(|| ExpenseValidationError::UnknownCategory(input.category.trim().into()))?;

        let (Some(amount), Some(date)) = (input.amount, input.date) else {
            // missing_fields() already covered both
            return Err(ExpenseValidationError::MissingFields(input.missing_fields()));
        };

        Ok(Self {
            id: ExpenseId::new(),
            name: input.name.trim().to_string(),
            amount,
            category,
            date,
            description: input.description.trim().to_string(),
        })
    }

    pub fn id(&self) -> ExpenseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.amount,
            self.category
        )
    }
}

/// Candidate fields for a new expense, as collected by a form
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub name: String,
    pub amount: Option<Money>,
    pub category: String,
    pub date: Option<NaiveDate>,
    pub description: String,
}

impl NewExpense {
    /// Create a fully populated candidate
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: Some(amount),
            category: category.into(),
            date: Some(date),
            description: description.into(),
        }
    }

    /// Fields that are absent or blank, in form order
    pub fn missing_fields(&self) -> Vec<ExpenseField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(ExpenseField::Name);
        }
        if self.amount.is_none() {
            missing.push(ExpenseField::Amount);
        }
        if self.category.trim().is_empty() {
            missing.push(ExpenseField::Category);
        }
        if self.date.is_none() {
            missing.push(ExpenseField::Date);
        }
        if self.description.trim().is_empty() {
            missing.push(ExpenseField::Description);
        }
        missing
    }
}

/// The fields of an expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    Name,
    Amount,
    Category,
    Date,
    Description,
}

impl fmt::Display for ExpenseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Amount => write!(f, "amount"),
            Self::Category => write!(f, "category"),
            Self::Date => write!(f, "date"),
            Self::Description => write!(f, "description"),
        }
    }
}

/// Validation errors for candidate expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingFields(Vec<ExpenseField>),
    UnknownCategory(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                let names: Vec<String> = fields.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "All fields must be filled (missing: {})",
                    names.join(", ")
                )
            }
            Self::UnknownCategory(name) => write!(f, "Unknown category: '{}'", name),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_record() {
        let input = NewExpense::new(
            " Lunch ",
            Money::from_units(12),
            "food",
            date(2024, 1, 5),
            "Sandwich",
        );

        let record = ExpenseRecord::create(input, &CategorySet::default()).unwrap();
        assert_eq!(record.name(), "Lunch");
        assert_eq!(record.amount(), Money::from_units(12));
        assert_eq!(record.category().name(), "Food");
        assert_eq!(record.date(), date(2024, 1, 5));
        assert_eq!(record.description(), "Sandwich");
    }

    #[test]
    fn test_zero_amount_is_present() {
        let input = NewExpense::new("Freebie", Money::zero(), "Other", date(2024, 1, 5), "gift");
        assert!(input.missing_fields().is_empty());
        assert!(ExpenseRecord::create(input, &CategorySet::default()).is_ok());
    }

    #[test]
    fn test_missing_fields_listed_in_form_order() {
        let input = NewExpense {
            name: "   ".into(),
            amount: None,
            category: "Food".into(),
            date: None,
            description: String::new(),
        };

        assert_eq!(
            ExpenseRecord::create(input, &CategorySet::default()),
            Err(ExpenseValidationError::MissingFields(vec![
                ExpenseField::Name,
                ExpenseField::Amount,
                ExpenseField::Date,
                ExpenseField::Description,
            ]))
        );
    }

    #[test]
    fn test_unknown_category() {
        let input = NewExpense::new("Taxi", Money::from_units(9), "Travel", date(2024, 1, 5), "ride");
        assert_eq!(
            ExpenseRecord::create(input, &CategorySet::default()),
            Err(ExpenseValidationError::UnknownCategory("Travel".into()))
        );
    }

    #[test]
    fn test_identical_inputs_get_distinct_ids() {
        let categories = CategorySet::default();
        let input = NewExpense::new("Bus", Money::from_units(2), "Transportation", date(2024, 3, 1), "fare");
        let a = ExpenseRecord::create(input.clone(), &categories).unwrap();
        let b = ExpenseRecord::create(input, &categories).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_display() {
        let input = NewExpense::new("Lunch", Money::from_minor(1250), "Food", date(2024, 1, 5), "x");
        let record = ExpenseRecord::create(input, &CategorySet::default()).unwrap();
        assert_eq!(record.to_string(), "2024-01-05 Lunch 12.50 (Food)");
    }
}
