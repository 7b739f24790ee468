//! Core data models for the expense ledger
//!
//! This module contains the data structures of the ledger domain:
//! money, transactions, the ledger itself, and the category registry.

pub mod category;
pub mod ledger;
pub mod money;
pub mod transaction;

pub use category::CategoryInfo;
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionType};
