//! Trends Report
//!
//! Per-date series for balance progression and income-vs-expense charts.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Settings;
use crate::models::{Ledger, Money};

use super::analytics;

/// One date in the trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub net: Money,
    pub income: Money,
    pub expense: Money,
    /// Cumulative net up to and including this date
    pub running_balance: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendsReport {
    /// Ascending by date; dates without transactions are absent
    pub points: Vec<TrendPoint>,
}

impl TrendsReport {
    /// Generate the series from an already filtered ledger
    pub fn generate(filtered: &Ledger) -> Self {
        // Both series are keyed by the same distinct dates in ascending order.
        let points = analytics::income_expense_by_date(filtered)
            .into_iter()
            .zip(analytics::running_balance(filtered))
            .map(|((date, totals), (_, running_balance))| TrendPoint {
                date,
                net: totals.net(),
                income: totals.income,
                expense: totals.expense,
                running_balance,
            })
            .collect();

        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        if self.is_empty() {
            return "No transactions for this period.\n".to_string();
        }

        let symbol = &settings.currency_symbol;
        let mut output = String::new();
        output.push_str(&format!(
            "{:<12} {:>14} {:>14} {:>14} {:>16}\n",
            "Date", "Income", "Expense", "Net", "Balance"
        ));
        output.push_str(&"-".repeat(74));
        output.push('\n');

        for point in &self.points {
            output.push_str(&format!(
                "{:<12} {:>14} {:>14} {:>14} {:>16}\n",
                settings.format_date(point.date),
                point.income.format_with_symbol(symbol),
                point.expense.format_with_symbol(symbol),
                point.net.format_signed(symbol),
                point.running_balance.format_with_symbol(symbol)
            ));
        }

        output
    }
}
