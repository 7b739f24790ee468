//! CLI commands for reports
//!
//! Implements `summary`, `spending`, `trends` and `export`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_dashboard_json, DashboardExport};
use crate::reports::{AccountSummary, SpendingReport, TrendsReport};
use crate::services::filter::{self, Period, TransactionFilter};
use crate::storage::Storage;

/// Period selection shared by the report commands
#[derive(Args, Debug)]
pub struct PeriodArgs {
    /// Time period (7d, 30d, 90d, all); defaults to the configured period
    #[arg(short, long, value_enum)]
    pub period: Option<Period>,
}

impl PeriodArgs {
    fn resolve(&self, settings: &Settings) -> Period {
        self.period.unwrap_or(settings.default_period)
    }
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub period: PeriodArgs,

    /// Output file; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `summary`
pub fn handle_summary_command(storage: &Storage, settings: &Settings, args: PeriodArgs) -> LedgerResult<()> {
    let ledger = storage.ledger.load()?;
    let summary = AccountSummary::generate(&ledger, args.resolve(settings), filter::today(), settings);
    print!("{}", summary.format_terminal(settings));
    Ok(())
}

/// Handle `spending`
pub fn handle_spending_command(storage: &Storage, settings: &Settings, args: PeriodArgs) -> LedgerResult<()> {
    let period = args.resolve(settings);
    let filtered = TransactionFilter::new()
        .period(period)
        .apply(&storage.ledger.load()?);

    println!("Spending by Category: {}", period);
    print!("{}", SpendingReport::generate(&filtered).format_terminal(settings));
    Ok(())
}

/// Handle `trends`
pub fn handle_trends_command(storage: &Storage, settings: &Settings, args: PeriodArgs) -> LedgerResult<()> {
    let period = args.resolve(settings);
    let filtered = TransactionFilter::new()
        .period(period)
        .apply(&storage.ledger.load()?);

    println!("Balance Progression: {}", period);
    print!("{}", TrendsReport::generate(&filtered).format_terminal(settings));
    Ok(())
}

/// Handle `export`
pub fn handle_export_command(storage: &Storage, settings: &Settings, args: ExportArgs) -> LedgerResult<()> {
    let ledger = storage.ledger.load()?;
    let export = DashboardExport::generate(
        &ledger,
        args.period.resolve(settings),
        filter::today(),
        settings,
    );

    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                LedgerError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_dashboard_json(&export, &mut writer, true)?;
            writer
                .flush()
                .map_err(|e| LedgerError::Export(e.to_string()))?;
            info!(path = %path.display(), "Exported dashboard");
            println!("Dashboard exported to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            export_dashboard_json(&export, &mut handle, true)?;
            writeln!(handle).map_err(|e| LedgerError::Export(e.to_string()))?;
        }
    }

    Ok(())
}
