//! Transaction service
//!
//! Validates user input before anything reaches the ledger store, builds the
//! signed transaction, appends it and records the append in the audit log.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{category, Ledger, Money, Transaction, TransactionType};
use crate::storage::Storage;

use super::filter::TransactionFilter;

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub date: NaiveDate,
    pub kind: TransactionType,
    /// Positive magnitude as entered; the sign comes from `kind`
    pub magnitude: Money,
    pub category: String,
    pub description: Option<String>,
}

/// Service for transaction entry and retrieval
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Check an input without touching storage
    pub fn validate(input: &CreateTransactionInput) -> LedgerResult<()> {
        if !input.magnitude.is_positive() {
            return Err(LedgerError::Validation(format!(
                "{} amount must be greater than zero, got {}",
                input.kind, input.magnitude
            )));
        }

        if input.category.trim().is_empty() {
            return Err(LedgerError::Validation("Category cannot be empty".into()));
        }

        Ok(())
    }

    /// Create and persist a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> LedgerResult<Transaction> {
        Self::validate(&input)?;

        let category = resolve_category(&input.category);
        let description = input
            .description
            .map(|d| d.trim().to_string())
            .unwrap_or_default();

        let txn = Transaction::new(input.date, input.kind, input.magnitude, category, description);
        debug!(%txn, "Creating transaction");

        self.storage.append_transaction(txn.clone())?;

        Ok(txn)
    }

    /// Load the full ledger
    pub fn ledger(&self) -> LedgerResult<Ledger> {
        self.storage.ledger.load()
    }

    /// Load the ledger and apply `filter` relative to `today`
    pub fn list(&self, filter: &TransactionFilter, today: NaiveDate) -> LedgerResult<Ledger> {
        Ok(filter.apply_as_of(&self.ledger()?, today))
    }
}

/// Map loose input ("food") onto a registry identifier, else keep it verbatim
fn resolve_category(input: &str) -> String {
    match category::find_by_name(input) {
        Some(info) => info.id.to_string(),
        None => input.trim().to_string(),
    }
}
