//! Spending Report
//!
//! Expense breakdown by category for a filtered ledger, with registry
//! colour and description attached to each row for legends and charts.

use serde::Serialize;

use crate::config::Settings;
use crate::models::{category, Ledger, Money};

use super::analytics;

/// Spending for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingByCategory {
    /// Category identifier as stored
    pub category: String,
    /// Registry colour, or the "Other" colour for unknown categories
    pub color: &'static str,
    pub description: &'static str,
    /// Expense magnitude (non-negative)
    pub amount: Money,
    pub transaction_count: usize,
    /// Share of total spending
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingReport {
    /// Rows ordered by amount, largest first
    pub categories: Vec<SpendingByCategory>,
    pub total_spending: Money,
}

impl SpendingReport {
    /// Generate a spending report from an already filtered ledger
    pub fn generate(filtered: &Ledger) -> Self {
        let totals = analytics::expense_by_category(filtered);
        let total_spending = analytics::total_expenses(filtered);

        let mut categories: Vec<SpendingByCategory> = totals
            .into_iter()
            .map(|(name, amount)| {
                let info = category::resolve(&name);
                let transaction_count = filtered
                    .iter()
                    .filter(|t| t.amount.is_negative() && t.category == name)
                    .count();
                let percentage = if total_spending.is_zero() {
                    0.0
                } else {
                    amount.cents() as f64 * 100.0 / total_spending.cents() as f64
                };

                SpendingByCategory {
                    category: name,
                    color: info.color,
                    description: info.description,
                    amount,
                    transaction_count,
                    percentage,
                }
            })
            .collect();

        // Largest first; ties keep the map's name order
        categories.sort_by(|a, b| b.amount.cmp(&a.amount));

        Self {
            categories,
            total_spending,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        if self.is_empty() {
            return "No expenses recorded for this period.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{:<22} {:>14} {:>6} {:>7}  {:<8} {}\n",
            "Category", "Amount", "Count", "%", "Color", "Description"
        ));
        output.push_str(&"-".repeat(90));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:<22} {:>14} {:>6} {:>6.1}%  {:<8} {}\n",
                row.category,
                settings.format_money(row.amount),
                row.transaction_count,
                row.percentage,
                row.color,
                row.description
            ));
        }

        output.push_str(&"-".repeat(90));
        output.push('\n');
        output.push_str(&format!(
            "{:<22} {:>14}\n",
            "TOTAL SPENDING",
            settings.format_money(self.total_spending)
        ));

        output
    }
}
