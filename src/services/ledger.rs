//! Expense ledger
//!
//! The ledger owns the ordered sequence of expense records together with a
//! running total. Every successful add or remove adjusts the total by exactly
//! the amount of the record involved; failed operations leave both untouched.

use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CategorySet, ExpenseId, ExpenseRecord, Money, NewExpense};

use super::filter::{filter, FilterSpec};

/// The authoritative list of expenses for one session
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    categories: CategorySet,
    records: Vec<ExpenseRecord>,
    total: Money,
}

impl Ledger {
    /// Create an empty ledger using the default categories
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger that accepts the given categories
    pub fn with_categories(categories: CategorySet) -> Self {
        Self {
            categories,
            records: Vec::new(),
            total: Money::zero(),
        }
    }

    /// Validate and append a new expense
    ///
    /// On success the record is appended to the end of the ledger and the
    /// running total grows by its amount. An amount that would push the total
    /// out of range is rejected like any other invalid input.
    pub fn add(&mut self, input: NewExpense) -> ExpenseResult<&ExpenseRecord> {
        let record = ExpenseRecord::create(input, &self.categories).map_err(|e| {
            warn!(error = %e, "rejected expense");
            ExpenseError::from(e)
        })?;

        let total = self.total.checked_add(record.amount()).ok_or_else(|| {
            warn!(amount = %record.amount(), total = %self.total, "rejected expense");
            ExpenseError::Overflow(format!(
                "adding {} would overflow the running total",
                record.amount()
            ))
        })?;

        debug!(id = %record.id(), amount = %record.amount(), category = %record.category(), "adding expense");
        self.total = total;
        self.records.push(record);
        self.check_total();

        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// Remove the record with the given id
    pub fn remove(&mut self, id: ExpenseId) -> ExpenseResult<ExpenseRecord> {
        let index = self
            .position(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
        self.take(index)
    }

    /// Remove the record at a position in the full ledger
    pub fn remove_at(&mut self, index: usize) -> ExpenseResult<ExpenseRecord> {
        if index >= self.records.len() {
            return Err(ExpenseError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        self.take(index)
    }

    /// Remove the record shown at `index` in the view produced by `spec`
    ///
    /// The position is resolved to the record's id first, so the removed
    /// record is always the one displayed there, whatever the filter.
    pub fn remove_visible(
        &mut self,
        spec: &FilterSpec,
        index: usize,
    ) -> ExpenseResult<ExpenseRecord> {
        let visible = self.filter(spec);
        let id = visible
            .get(index)
            .map(|record| record.id())
            .ok_or(ExpenseError::IndexOutOfRange {
                index,
                len: visible.len(),
            })?;
        self.remove(id)
    }

    /// The running total of every record in the ledger
    pub fn total(&self) -> Money {
        self.total
    }

    /// The records matching `spec`, in ledger order
    pub fn filter(&self, spec: &FilterSpec) -> Vec<&ExpenseRecord> {
        filter(&self.records, spec)
    }

    pub fn get(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: ExpenseId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn take(&mut self, index: usize) -> ExpenseResult<ExpenseRecord> {
        // Mixed signs can leave the remaining records summing out of range
        let amount = self.records[index].amount();
        self.total = self.total.checked_sub(amount).ok_or_else(|| {
            ExpenseError::Overflow(format!(
                "removing {} would overflow the running total",
                amount
            ))
        })?;

        let record = self.records.remove(index);
        debug!(id = %record.id(), amount = %record.amount(), "removed expense");
        self.check_total();
        Ok(record)
    }

    fn check_total(&self) {
        debug_assert_eq!(
            i128::from(self.total.minor()),
            self.records
                .iter()
                .map(|r| i128::from(r.amount().minor()))
                .sum::<i128>(),
            "running total out of sync with records"
        );
    }
}
