//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions and the category
//! registry for terminal display.

pub mod category;
pub mod transaction;

pub use category::{format_category_list, format_used_categories};
pub use transaction::{format_transaction_added, format_transaction_history};
