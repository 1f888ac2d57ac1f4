//! Service layer for the expense ledger
//!
//! The service layer holds the ledger itself and the pure functions that
//! derive views from it: the filter and the category aggregation.

pub mod filter;
pub mod ledger;
pub mod summary;

pub use filter::{filter, DateRange, FilterSpec};
pub use ledger::Ledger;
pub use summary::{aggregate, CategorySummary, CategoryTotal, ChartSlice, DEFAULT_PALETTE};
