//! Account Summary Report
//!
//! Headline figures for a period: the current balance over the whole
//! ledger, plus income, expenses and savings rate over the filtered view.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Settings;
use crate::models::{Ledger, Money};
use crate::services::filter::{Period, TransactionFilter};

use super::analytics;

/// Account summary for one period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    /// Period the income/expense figures cover
    pub period: Period,
    /// Balance over every transaction, regardless of period
    pub balance: Money,
    /// Whether `balance` is below the configured threshold
    pub low_balance: bool,
    pub total_income: Money,
    pub total_expenses: Money,
    /// `None` when the period has no income
    pub savings_rate: Option<f64>,
    /// Signed sum over the period
    pub net_total: Money,
    pub transaction_count: usize,
}

impl AccountSummary {
    /// Generate a summary of `ledger` for `period`, relative to `today`
    pub fn generate(ledger: &Ledger, period: Period, today: NaiveDate, settings: &Settings) -> Self {
        let filtered = TransactionFilter::new().period(period).apply_as_of(ledger, today);
        let balance = analytics::balance(ledger);
        let total_income = analytics::total_income(&filtered);
        let total_expenses = analytics::total_expenses(&filtered);

        Self {
            period,
            balance,
            low_balance: settings.is_low_balance(balance),
            total_income,
            total_expenses,
            savings_rate: analytics::savings_rate_from(total_income, total_expenses),
            net_total: analytics::net_total(&filtered),
            transaction_count: filtered.len(),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let money = |m: Money| settings.format_money(m);
        let mut output = String::new();

        output.push_str(&format!("Account Summary: {}\n", self.period));
        output.push_str(&"=".repeat(50));
        output.push('\n');

        output.push_str(&format!("{:<20} {:>20}\n", "Current Balance:", money(self.balance)));
        if self.low_balance {
            output.push_str(&format!(
                "  Warning: balance is below {}\n",
                money(settings.low_balance_threshold)
            ));
        }

        output.push_str(&format!("{:<20} {:>20}\n", "Income:", money(self.total_income)));
        output.push_str(&format!("{:<20} {:>20}\n", "Expenses:", money(self.total_expenses)));

        let rate = match self.savings_rate {
            Some(rate) => format!("{:.1}%", rate),
            None => "n/a".to_string(),
        };
        output.push_str(&format!("{:<20} {:>20}\n", "Savings Rate:", rate));

        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>20}\n",
            "Net for Period:",
            self.net_total.format_signed(&settings.currency_symbol)
        ));
        output.push_str(&format!("{:<20} {:>20}\n", "Transactions:", self.transaction_count));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionType};
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
    }

    fn txn(days_ago: u64, kind: TransactionType, cents: i64, category: &str) -> Transaction {
        let date = today().checked_sub_days(Days::new(days_ago)).unwrap();
        Transaction::new(date, kind, Money::from_cents(cents), category, "")
    }

    #[test]
    fn test_balance_ignores_period() {
        let ledger = Ledger::from_transactions(vec![
            txn(60, TransactionType::Income, 500000, "💰 Salary"),
            txn(2, TransactionType::Expense, 20000, "🍔 Food"),
        ]);

        let summary = AccountSummary::generate(&ledger, Period::Last7Days, today(), &Settings::default());

        assert_eq!(summary.balance, Money::from_cents(480000));
        assert_eq!(summary.total_income, Money::zero());
        assert_eq!(summary.total_expenses, Money::from_cents(20000));
        assert_eq!(summary.savings_rate, None);
        assert_eq!(summary.net_total, Money::from_cents(-20000));
        assert_eq!(summary.transaction_count, 1);
        assert!(!summary.low_balance);
    }

    #[test]
    fn test_all_time_scenario() {
        let ledger = Ledger::from_transactions(vec![
            txn(0, TransactionType::Expense, 20000, "🍔 Food"),
            txn(0, TransactionType::Income, 500000, "💰 Salary"),
        ]);

        let summary = AccountSummary::generate(&ledger, Period::AllTime, today(), &Settings::default());

        assert_eq!(summary.savings_rate, Some(96.0));
        assert_eq!(summary.transaction_count, 2);
    }

    #[test]
    fn test_low_balance_flag() {
        let ledger = Ledger::new().append(txn(0, TransactionType::Income, 99999, "💰 Salary"));
        let summary = AccountSummary::generate(&ledger, Period::AllTime, today(), &Settings::default());
        assert!(summary.low_balance);

        let output = summary.format_terminal(&Settings::default());
        assert!(output.contains("Warning"));
        assert!(output.contains("₹999.99"));
    }

    #[test]
    fn test_empty_ledger_summary() {
        let summary =
            AccountSummary::generate(&Ledger::new(), Period::Last30Days, today(), &Settings::default());

        assert_eq!(summary.balance, Money::zero());
        assert_eq!(summary.transaction_count, 0);
        assert!(summary.format_terminal(&Settings::default()).contains("n/a"));
    }
}
