//! Transaction model
//!
//! A transaction is one dated income or expense event. The sign of `amount`
//! is authoritative for direction; `type_label` is a human-readable tag set
//! once at creation time and never re-derived.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Direction of a transaction as chosen at entry time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Label written to the `Type` column
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Apply this direction to a positive magnitude
    pub fn signed(&self, magnitude: Money) -> Money {
        match self {
            Self::Income => magnitude,
            Self::Expense => -magnitude,
        }
    }

    /// Interpret a stored label, tolerating decorations like "💸 Expense"
    pub fn from_label(label: &str) -> Option<Self> {
        let lower = label.to_lowercase();
        match (lower.contains("income"), lower.contains("expense")) {
            (true, false) => Some(Self::Income),
            (false, true) => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single ledger entry
///
/// Field order mirrors the persisted column order:
/// date, category, description, amount, type_label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date of the event
    pub date: NaiveDate,

    /// Category identifier; unknown identifiers are kept verbatim
    pub category: String,

    /// Free text, may be empty
    #[serde(default)]
    pub description: String,

    /// Signed amount: negative is an expense, zero or positive is income
    pub amount: Money,

    /// Redundant direction tag ("Income"/"Expense")
    pub type_label: String,
}

impl Transaction {
    /// Create a transaction from a direction and a positive magnitude
    ///
    /// Expense magnitudes are stored negated and `type_label` follows `kind`.
    /// The magnitude is not validated here; see `TransactionService::create`.
    pub fn new(
        date: NaiveDate,
        kind: TransactionType,
        magnitude: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            description: description.into(),
            amount: kind.signed(magnitude),
            type_label: kind.label().to_string(),
        }
    }

    /// Build a transaction from raw field values exactly as persisted
    pub fn from_parts(
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
        type_label: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            description: description.into(),
            amount,
            type_label: type_label.into(),
        }
    }

    /// Strictly positive amount
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    /// Strictly negative amount
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// Direction declared by `type_label`, if recognizable
    pub fn declared_type(&self) -> Option<TransactionType> {
        TransactionType::from_label(&self.type_label)
    }

    /// Whether `type_label` agrees with the sign of `amount`
    ///
    /// Zero amounts agree with either label. Unrecognized labels never agree.
    /// This only reports the mismatch; nothing repairs it.
    pub fn label_matches_sign(&self) -> bool {
        match self.declared_type() {
            Some(TransactionType::Income) => !self.amount.is_negative(),
            Some(TransactionType::Expense) => !self.amount.is_positive(),
            None => false,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}
