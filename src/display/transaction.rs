//! Transaction display formatting
//!
//! Renders the transaction history table: newest first, signed amounts,
//! followed by a count line and the net total of the rows shown.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Ledger, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Type")]
    type_label: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, settings: &Settings) -> Self {
        Self {
            date: settings.format_date(txn.date),
            category: txn.category.clone(),
            description: truncate(&txn.description, 40),
            amount: txn.amount.format_signed(&settings.currency_symbol),
            type_label: txn.type_label.clone(),
        }
    }
}

/// Format a filtered ledger as a history table, newest first
pub fn format_transaction_history(ledger: &Ledger, settings: &Settings) -> String {
    if ledger.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = ledger
        .sorted_newest_first()
        .into_iter()
        .map(|txn| TransactionRow::new(txn, settings))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(3), Alignment::right());

    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format!("Showing {} transaction(s)\n", ledger.len()));
    output.push_str(&format!(
        "Total for filtered transactions: {}\n",
        ledger.net_total().format_signed(&settings.currency_symbol)
    ));

    output
}

/// One-line confirmation after a transaction is recorded
pub fn format_transaction_added(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "Recorded {} of {} in {} on {}",
        txn.type_label.to_lowercase(),
        txn.amount.abs().format_with_symbol(&settings.currency_symbol),
        txn.category,
        settings.format_date(txn.date)
    )
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
