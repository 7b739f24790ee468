//! JSON dashboard export
//!
//! Snapshots everything a charting front-end needs for one period:
//! headline summary, spending breakdown, per-date series and the rows
//! behind them. Amounts are serialized as integer minor units.

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, Transaction};
use crate::reports::{AccountSummary, SpendingReport, TrendPoint, TrendsReport};
use crate::services::filter::{Period, TransactionFilter};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Dashboard snapshot for one period
#[derive(Debug, Clone, Serialize)]
pub struct DashboardExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub currency_symbol: String,

    pub period: Period,

    /// Date the period is relative to
    pub as_of: NaiveDate,

    pub summary: AccountSummary,

    pub spending: SpendingReport,

    pub trends: Vec<TrendPoint>,

    /// Sorted distinct categories in the period, for filter selectors
    pub categories: Vec<String>,

    /// Transactions in the period, in insertion order
    pub transactions: Vec<Transaction>,
}

impl DashboardExport {
    /// Build a snapshot of `ledger` for `period`, relative to `today`
    pub fn generate(ledger: &Ledger, period: Period, today: NaiveDate, settings: &Settings) -> Self {
        let filtered = TransactionFilter::new().period(period).apply_as_of(ledger, today);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency_symbol: settings.currency_symbol.clone(),
            period,
            as_of: today,
            summary: AccountSummary::generate(ledger, period, today, settings),
            spending: SpendingReport::generate(&filtered),
            trends: TrendsReport::generate(&filtered).points,
            categories: filtered.distinct_categories(),
            transactions: filtered.into_transactions(),
        }
    }
}

/// Write a dashboard snapshot as JSON
pub fn export_dashboard_json<W: Write>(
    export: &DashboardExport,
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
