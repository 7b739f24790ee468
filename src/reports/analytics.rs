//! Ledger aggregation
//!
//! Pure functions turning a (usually filtered) ledger into totals and
//! per-category or per-date series. None of them fail: an empty ledger
//! yields zero totals, empty maps and no savings rate.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Ledger, Money};

/// Income and expense totals for one date; both are non-negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IncomeExpense {
    pub income: Money,
    pub expense: Money,
}

impl IncomeExpense {
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Current balance: sum of every amount
///
/// Callers pass the full, unfiltered ledger.
pub fn balance(ledger: &Ledger) -> Money {
    ledger.net_total()
}

/// Sum of strictly positive amounts
pub fn total_income(ledger: &Ledger) -> Money {
    ledger
        .iter()
        .filter(|t| t.amount.is_positive())
        .map(|t| t.amount)
        .sum()
}

/// Sum of the magnitudes of strictly negative amounts
pub fn total_expenses(ledger: &Ledger) -> Money {
    ledger
        .iter()
        .filter(|t| t.amount.is_negative())
        .map(|t| t.amount.abs())
        .sum()
}

/// `(income - expenses) / income * 100`, or `None` when there is no income
pub fn savings_rate(ledger: &Ledger) -> Option<f64> {
    savings_rate_from(total_income(ledger), total_expenses(ledger))
}

/// Savings rate from precomputed totals
pub fn savings_rate_from(income: Money, expenses: Money) -> Option<f64> {
    if !income.is_positive() {
        return None;
    }
    // Scale before dividing so whole-percent results come out exact.
    let retained = (income - expenses).cents() as f64 * 100.0;
    Some(retained / income.cents() as f64)
}

/// Expense magnitude per category
///
/// Only categories with at least one negative amount appear.
pub fn expense_by_category(ledger: &Ledger) -> BTreeMap<String, Money> {
    let mut totals = BTreeMap::new();
    for txn in ledger.iter().filter(|t| t.amount.is_negative()) {
        *totals.entry(txn.category.clone()).or_insert_with(Money::zero) += txn.amount.abs();
    }
    totals
}

/// Signed sum per distinct date; dates without transactions are absent
pub fn daily_net(ledger: &Ledger) -> BTreeMap<NaiveDate, Money> {
    let mut totals = BTreeMap::new();
    for txn in ledger {
        *totals.entry(txn.date).or_insert_with(Money::zero) += txn.amount;
    }
    totals
}

/// Income and expense totals per distinct date
pub fn income_expense_by_date(ledger: &Ledger) -> BTreeMap<NaiveDate, IncomeExpense> {
    let mut totals: BTreeMap<NaiveDate, IncomeExpense> = BTreeMap::new();
    for txn in ledger {
        let entry = totals.entry(txn.date).or_default();
        if txn.amount.is_positive() {
            entry.income += txn.amount;
        } else {
            entry.expense += txn.amount.abs();
        }
    }
    totals
}

/// Cumulative sum of `daily_net`, in date order
pub fn running_balance(ledger: &Ledger) -> Vec<(NaiveDate, Money)> {
    daily_net(ledger)
        .into_iter()
        .scan(Money::zero(), |acc, (date, net)| {
            *acc += net;
            Some((date, *acc))
        })
        .collect()
}

/// Sum of every amount in the ledger, signed
pub fn net_total(ledger: &Ledger) -> Money {
    ledger.net_total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionType};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn txn(day: u32, cents: i64, category: &str) -> Transaction {
        let kind = if cents < 0 {
            TransactionType::Expense
        } else {
            TransactionType::Income
        };
        Transaction::new(date(day), kind, Money::from_cents(cents.abs()), category, "")
    }

    fn scenario() -> Ledger {
        Ledger::from_transactions(vec![
            txn(1, -20000, "🍔 Food"),
            txn(1, 500000, "💰 Salary"),
        ])
    }

    fn mixed() -> Ledger {
        Ledger::from_transactions(vec![
            txn(3, -1250, "🍔 Food"),
            txn(1, 300000, "💰 Salary"),
            txn(3, -4000, "🚌 Transportation"),
            txn(2, 0, "📦 Other"),
            txn(5, -750, "🍔 Food"),
            txn(5, 1500, "🎁 Gifts"),
            txn(9, -999, "🍕 Pizza"),
        ])
    }

    #[test]
    fn test_food_and_salary_scenario() {
        let ledger = scenario();

        assert_eq!(balance(&ledger), Money::from_cents(480000));
        assert_eq!(total_income(&ledger), Money::from_cents(500000));
        assert_eq!(total_expenses(&ledger), Money::from_cents(20000));
        assert_eq!(savings_rate(&ledger), Some(96.0));

        let by_category = expense_by_category(&ledger);
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category["🍔 Food"], Money::from_cents(20000));
    }

    #[test]
    fn test_empty_ledger_identities() {
        let ledger = Ledger::new();

        assert_eq!(balance(&ledger), Money::zero());
        assert_eq!(total_income(&ledger), Money::zero());
        assert_eq!(total_expenses(&ledger), Money::zero());
        assert_eq!(savings_rate(&ledger), None);
        assert!(expense_by_category(&ledger).is_empty());
        assert!(daily_net(&ledger).is_empty());
        assert!(income_expense_by_date(&ledger).is_empty());
        assert!(running_balance(&ledger).is_empty());
    }

    #[test]
    fn test_savings_rate_undefined_without_income() {
        let ledger = Ledger::new().append(txn(1, -500, "🍔 Food"));
        assert_eq!(savings_rate(&ledger), None);
        assert_eq!(savings_rate_from(Money::zero(), Money::zero()), None);
    }

    #[test]
    fn test_savings_rate_can_be_negative() {
        let rate = savings_rate_from(Money::from_cents(10000), Money::from_cents(15000)).unwrap();
        assert_eq!(rate, -50.0);
    }

    #[test]
    fn test_balance_equals_income_minus_expenses() {
        for ledger in [scenario(), mixed(), Ledger::new()] {
            assert_eq!(
                balance(&ledger),
                total_income(&ledger) - total_expenses(&ledger)
            );
        }
    }

    #[test]
    fn test_category_sums_equal_total_expenses() {
        for ledger in [scenario(), mixed(), Ledger::new()] {
            let summed: Money = expense_by_category(&ledger).values().copied().sum();
            assert_eq!(summed, total_expenses(&ledger));
        }
    }

    #[test]
    fn test_expense_by_category_omits_income_only_categories() {
        let by_category = expense_by_category(&mixed());

        assert_eq!(by_category.len(), 3);
        assert_eq!(by_category["🍔 Food"], Money::from_cents(2000));
        assert_eq!(by_category["🍕 Pizza"], Money::from_cents(999));
        assert!(!by_category.contains_key("💰 Salary"));
        assert!(!by_category.contains_key("📦 Other"));
    }

    #[test]
    fn test_daily_net_has_no_gaps_filled() {
        let net = daily_net(&mixed());

        assert_eq!(net.keys().copied().collect::<Vec<_>>(), vec![
            date(1),
            date(2),
            date(3),
            date(5),
            date(9)
        ]);
        assert_eq!(net[&date(3)], Money::from_cents(-5250));
        assert_eq!(net[&date(2)], Money::zero());
        assert_eq!(net[&date(5)], Money::from_cents(750));
    }

    #[test]
    fn test_income_expense_by_date() {
        let series = income_expense_by_date(&mixed());

        assert_eq!(series.len(), 5);
        assert_eq!(
            series[&date(5)],
            IncomeExpense {
                income: Money::from_cents(1500),
                expense: Money::from_cents(750),
            }
        );
        assert_eq!(series[&date(2)], IncomeExpense::default());

        for (day, entry) in &series {
            assert_eq!(entry.net(), daily_net(&mixed())[day]);
        }
    }

    #[test]
    fn test_running_balance() {
        let series = running_balance(&mixed());

        assert_eq!(series.first(), Some(&(date(1), Money::from_cents(300000))));
        assert_eq!(series.last().unwrap().1, balance(&mixed()));
    }

    #[test]
    fn test_huge_amounts_do_not_overflow() {
        let huge = Money::from_cents(i64::MAX / 2 + 1);
        let ledger = Ledger::from_transactions(vec![
            Transaction::new(date(1), TransactionType::Income, huge, "💰 Salary", ""),
            Transaction::new(date(2), TransactionType::Income, huge, "💰 Salary", ""),
            Transaction::new(date(2), TransactionType::Expense, huge, "🍔 Food", ""),
            Transaction::new(date(3), TransactionType::Expense, huge, "🍔 Food", ""),
        ]);

        assert_eq!(total_income(&ledger), Money::from_cents(i64::MAX));
        assert_eq!(total_expenses(&ledger), Money::from_cents(i64::MAX));
        assert!(savings_rate(&ledger).is_some());
        assert_eq!(running_balance(&ledger).len(), 3);
        assert_eq!(expense_by_category(&ledger)["🍔 Food"], Money::from_cents(i64::MAX));
    }
}
