//! Ledger model
//!
//! An ordered, append-only sequence of transactions. Order is insertion
//! order, not date order. Appending produces a new ledger and leaves the
//! original untouched.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::transaction::Transaction;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Return a new ledger with `txn` at the end
    #[must_use]
    pub fn append(&self, txn: Transaction) -> Self {
        let mut transactions = Vec::with_capacity(self.transactions.len() + 1);
        transactions.extend(self.transactions.iter().cloned());
        transactions.push(txn);
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Keep the transactions matching `predicate`, preserving order
    #[must_use]
    pub fn retain_where<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Transaction) -> bool,
    {
        self.transactions
            .iter()
            .filter(|t| predicate(t))
            .cloned()
            .collect()
    }

    /// Sum of all amounts, signed
    pub fn net_total(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Distinct category identifiers present, sorted
    pub fn distinct_categories(&self) -> Vec<String> {
        self.transactions
            .iter()
            .map(|t| t.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Transactions newest first; ties keep insertion order
    pub fn sorted_newest_first(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<_> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }
}

impl FromIterator<Transaction> for Ledger {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self {
            transactions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use chrono::NaiveDate;

    fn txn(day: u32, kind: TransactionType, cents: i64, category: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            kind,
            Money::from_cents(cents),
            category,
            "",
        )
    }

    #[test]
    fn test_append_is_functional() {
        let empty = Ledger::new();
        let one = empty.append(txn(1, TransactionType::Expense, 100, "🍔 Food"));

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let ledger = Ledger::new()
            .append(txn(5, TransactionType::Expense, 100, "🍔 Food"))
            .append(txn(1, TransactionType::Income, 100, "💰 Salary"));

        assert_eq!(ledger.transactions()[0].date.to_string(), "2024-01-05");
        assert_eq!(ledger.transactions()[1].date.to_string(), "2024-01-01");
    }

    #[test]
    fn test_sorted_newest_first_is_stable() {
        let ledger = Ledger::from_transactions(vec![
            txn(1, TransactionType::Expense, 100, "a"),
            txn(3, TransactionType::Expense, 200, "b"),
            txn(1, TransactionType::Expense, 300, "c"),
        ]);

        let sorted: Vec<_> = ledger
            .sorted_newest_first()
            .iter()
            .map(|t| t.category.as_str())
            .collect();
        assert_eq!(sorted, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_distinct_categories_sorted() {
        let ledger = Ledger::from_transactions(vec![
            txn(1, TransactionType::Expense, 100, "🚌 Transportation"),
            txn(2, TransactionType::Expense, 100, "🍔 Food"),
            txn(3, TransactionType::Expense, 100, "🚌 Transportation"),
        ]);

        let cats = ledger.distinct_categories();
        assert_eq!(cats.len(), 2);
        assert!(cats.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_net_total() {
        let ledger = Ledger::from_transactions(vec![
            txn(1, TransactionType::Expense, 20000, "🍔 Food"),
            txn(1, TransactionType::Income, 500000, "💰 Salary"),
        ]);
        assert_eq!(ledger.net_total(), Money::from_cents(480000));
        assert_eq!(Ledger::new().net_total(), Money::zero());
    }
}
