//! Service layer for the expense ledger
//!
//! The service layer sits on top of storage: it filters ledgers and
//! validates input before anything is appended.

pub mod filter;
pub mod transaction;

pub use filter::{Period, TransactionFilter, TypeFilter, ALL_CATEGORIES};
pub use transaction::{CreateTransactionInput, TransactionService};
