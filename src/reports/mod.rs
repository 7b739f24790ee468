//! Reports module for the expense ledger
//!
//! `analytics` holds the pure aggregation functions; the other modules
//! shape their output into summary, spending and trend reports.

pub mod analytics;
pub mod spending;
pub mod summary;
pub mod trends;

pub use analytics::IncomeExpense;
pub use spending::{SpendingByCategory, SpendingReport};
pub use summary::AccountSummary;
pub use trends::{TrendPoint, TrendsReport};
