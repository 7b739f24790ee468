//! Transaction CLI commands
//!
//! Implements `add` and `list`.

use chrono::NaiveDate;
use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::display::{format_transaction_added, format_transaction_history};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, TransactionType};
use crate::services::filter::{self, Period, TransactionFilter, TypeFilter};
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::Storage;

/// Direction argument for `add`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Income,
    Expense,
}

impl From<Direction> for TransactionType {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Income => TransactionType::Income,
            Direction::Expense => TransactionType::Expense,
        }
    }
}

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Income or expense
    #[arg(value_enum)]
    pub kind: Direction,

    /// Positive amount (e.g., "250" or "1,250.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category name (e.g., "Food" or "🍔 Food")
    #[arg(short, long, default_value = "📦 Other")]
    pub category: String,

    /// Description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Time period (7d, 30d, 90d, all); defaults to the configured period
    #[arg(short, long, value_enum)]
    pub period: Option<Period>,

    /// Transaction type (all, income, expense)
    #[arg(short = 't', long = "type", value_enum, default_value_t = TypeFilter::All)]
    pub kind: TypeFilter,

    /// Exact category identifier
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Handle `add`
pub fn handle_add_command(storage: &Storage, settings: &Settings, args: AddArgs) -> LedgerResult<()> {
    let magnitude = Money::parse(&args.amount)
        .map_err(|e| LedgerError::Validation(e.to_string()))?;

    let date = match args.date {
        Some(d) => parse_date(&d)?,
        None => filter::today(),
    };

    let service = TransactionService::new(storage);
    let txn = service.create(CreateTransactionInput {
        date,
        kind: args.kind.into(),
        magnitude,
        category: args.category,
        description: args.description,
    })?;

    println!("{}", format_transaction_added(&txn, settings));
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(storage: &Storage, settings: &Settings, args: ListArgs) -> LedgerResult<()> {
    let mut selector = TransactionFilter::new()
        .period(args.period.unwrap_or(settings.default_period))
        .kind(args.kind);
    if let Some(category) = args.category {
        selector = selector.category(category);
    }

    let service = TransactionService::new(storage);
    let ledger = service.list(&selector, filter::today())?;

    println!("Transaction History: {} / {}", selector.period, selector.kind);
    print!("{}", format_transaction_history(&ledger, settings));
    Ok(())
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}
