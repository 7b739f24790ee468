//! Transaction filtering
//!
//! Filters narrow a ledger by relative period, direction and category.
//! Each filter keeps insertion order and they compose by intersection, so
//! the order in which they are applied does not matter.

use std::fmt;

use chrono::{Days, Local, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::{Ledger, Transaction};

/// Category selector meaning "no category restriction"
pub const ALL_CATEGORIES: &str = "All Categories";

/// Relative date window ending today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
pub enum Period {
    #[serde(rename = "7d")]
    #[value(name = "7d", alias = "week")]
    Last7Days,
    #[default]
    #[serde(rename = "30d")]
    #[value(name = "30d", alias = "month")]
    Last30Days,
    #[serde(rename = "90d")]
    #[value(name = "90d", alias = "quarter")]
    Last90Days,
    #[serde(rename = "all")]
    #[value(name = "all")]
    AllTime,
}

impl Period {
    /// All periods in selector order
    pub fn all() -> [Period; 4] {
        [
            Period::Last7Days,
            Period::Last30Days,
            Period::Last90Days,
            Period::AllTime,
        ]
    }

    /// Window length in days; `None` for all time
    pub fn days(&self) -> Option<u64> {
        match self {
            Period::Last7Days => Some(7),
            Period::Last30Days => Some(30),
            Period::Last90Days => Some(90),
            Period::AllTime => None,
        }
    }

    /// First date inside the window (`today - N days`); `None` for all time
    pub fn start_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.days()
            .map(|n| today.checked_sub_days(Days::new(n)).unwrap_or(NaiveDate::MIN))
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.start_date(today) {
            Some(start) => date >= start,
            None => true,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Last7Days => write!(f, "Last 7 Days"),
            Period::Last30Days => write!(f, "Last 30 Days"),
            Period::Last90Days => write!(f, "Last 90 Days"),
            Period::AllTime => write!(f, "All Time"),
        }
    }
}

/// Direction restriction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    /// amount > 0
    #[value(name = "income")]
    IncomeOnly,
    /// amount < 0
    #[value(name = "expense")]
    ExpenseOnly,
}

impl TypeFilter {
    /// Zero amounts match neither `IncomeOnly` nor `ExpenseOnly`
    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::IncomeOnly => txn.amount.is_positive(),
            TypeFilter::ExpenseOnly => txn.amount.is_negative(),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => write!(f, "All Transactions"),
            TypeFilter::IncomeOnly => write!(f, "Income Only"),
            TypeFilter::ExpenseOnly => write!(f, "Expense Only"),
        }
    }
}

/// Combined filter; the default keeps everything
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionFilter {
    pub period: Period,
    pub kind: TypeFilter,
    /// Exact category identifier; `None` means all categories
    pub category: Option<String>,
}

impl TransactionFilter {
    /// A filter that keeps every transaction
    pub fn new() -> Self {
        Self {
            period: Period::AllTime,
            kind: TypeFilter::All,
            category: None,
        }
    }

    pub fn period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    pub fn kind(mut self, kind: TypeFilter) -> Self {
        self.kind = kind;
        self
    }

    /// Restrict to one category; `ALL_CATEGORIES` clears the restriction
    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category == ALL_CATEGORIES {
            None
        } else {
            Some(category)
        };
        self
    }

    pub fn matches(&self, txn: &Transaction, today: NaiveDate) -> bool {
        self.period.contains(txn.date, today)
            && self.kind.matches(txn)
            && self
                .category
                .as_deref()
                .map_or(true, |c| txn.category == c)
    }

    /// Apply relative to an explicit `today`
    pub fn apply_as_of(&self, ledger: &Ledger, today: NaiveDate) -> Ledger {
        ledger.retain_where(|t| self.matches(t, today))
    }

    /// Apply relative to the current local date
    pub fn apply(&self, ledger: &Ledger) -> Ledger {
        self.apply_as_of(ledger, today())
    }
}

impl Default for TransactionFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Keep transactions inside `period`, relative to `today`
pub fn filter_period(ledger: &Ledger, period: Period, today: NaiveDate) -> Ledger {
    ledger.retain_where(|t| period.contains(t.date, today))
}

/// Keep transactions matching `kind`
pub fn filter_type(ledger: &Ledger, kind: TypeFilter) -> Ledger {
    ledger.retain_where(|t| kind.matches(t))
}

/// Keep transactions in `category`; `None` keeps everything
pub fn filter_category(ledger: &Ledger, category: Option<&str>) -> Ledger {
    match category {
        Some(c) if c != ALL_CATEGORIES => ledger.retain_where(|t| t.category == c),
        _ => ledger.clone(),
    }
}

/// Apply all three filters relative to the current local date
pub fn filter(
    ledger: &Ledger,
    period: Period,
    kind: TypeFilter,
    category: Option<&str>,
) -> Ledger {
    let mut selector = TransactionFilter::new().period(period).kind(kind);
    if let Some(c) = category {
        selector = selector.category(c);
    }
    selector.apply(ledger)
}
