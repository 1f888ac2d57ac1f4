//! Category aggregation
//!
//! Groups a sequence of expenses by category for the spending breakdown.
//! Categories appear in the order their first record was encountered, and a
//! category without records is absent rather than present with zero. Chart
//! renderers take the label set straight from here, so both properties are
//! part of the contract.

use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseRecord, Money};

/// Colours assigned to chart slices by position
pub const DEFAULT_PALETTE: [&str; 7] = [
    "#FF5733", "#33FF57", "#3357FF", "#FF33A1", "#57FF33", "#5733FF", "#FFC300",
];

/// Spending of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    /// Number of records that contributed
    pub count: usize,
}

/// Category totals in first-encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    entries: Vec<CategoryTotal>,
    total: Money,
}

/// One labelled value of a pie chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
    pub percentage: f64,
}

/// Group records by category and sum their amounts
///
/// Fails with [`ExpenseError::Overflow`] when a category total or the overall
/// total does not fit.
pub fn aggregate<'a, I>(records: I) -> ExpenseResult<CategorySummary>
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut entries: Vec<CategoryTotal> = Vec::new();
    let mut total = Money::zero();

    for record in records {
        let amount = record.amount();
        total = checked_sum(total, amount, record.category())?;

        match entries.iter_mut().find(|e| &e.category == record.category()) {
            Some(entry) => {
                entry.total = checked_sum(entry.total, amount, &entry.category)?;
                entry.count += 1;
            }
            None => entries.push(CategoryTotal {
                category: record.category().clone(),
                total: amount,
                count: 1,
            }),
        }
    }

    Ok(CategorySummary { entries, total })
}

fn checked_sum(acc: Money, amount: Money, category: &Category) -> ExpenseResult<Money> {
    acc.checked_add(amount).ok_or_else(|| {
        ExpenseError::Overflow(format!("spending in {} does not fit", category))
    })
}

impl CategorySummary {
    /// Get the total for a category, if it had any records
    pub fn get(&self, category: &Category) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| &e.category == category)
            .map(|e| e.total)
    }

    /// Look up a total by category name
    pub fn get_by_name(&self, name: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| e.category.name() == name)
            .map(|e| e.total)
    }

    pub fn entries(&self) -> &[CategoryTotal] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.category.name()).collect()
    }

    pub fn values(&self) -> Vec<Money> {
        self.entries.iter().map(|e| e.total).collect()
    }

    /// Sum over all categories in the summary
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Percentage of the summary total that an entry accounts for
    ///
    /// Returns 0 when the summary total is zero.
    pub fn share(&self, entry: &CategoryTotal) -> f64 {
        let total = self.total();
        if total.is_zero() {
            0.0
        } else {
            entry.total.minor() as f64 / total.minor() as f64 * 100.0
        }
    }

    /// Pie chart data with colours assigned by position, cycling the palette
    pub fn chart_slices(&self, palette: &[&str]) -> Vec<ChartSlice> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| ChartSlice {
                label: entry.category.name().to_string(),
                value: entry.total.as_f64(),
                color: if palette.is_empty() {
                    String::new()
                } else {
                    palette[i % palette.len()].to_string()
                },
                percentage: self.share(entry),
            })
            .collect()
    }
}
