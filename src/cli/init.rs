//! `init` and `config` commands

use clap::Args;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::storage::Storage;

/// Arguments for `init`
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Reset a ledger that already holds transactions
    #[arg(long)]
    pub force: bool,
}

/// Handle `init`
///
/// Re-initializing an empty ledger is allowed; discarding recorded
/// transactions needs `--force`.
pub fn handle_init_command(storage: &Storage, settings: &Settings, args: InitArgs) -> LedgerResult<()> {
    if storage.is_initialized() && !args.force {
        let existing = storage.ledger.load()?;
        if !existing.is_empty() {
            return Err(LedgerError::Validation(format!(
                "Ledger at {} already holds {} transaction(s); use --force to reset it",
                storage.ledger.path().display(),
                existing.len()
            )));
        }
    }

    storage.initialize()?;

    let paths = storage.paths();
    if !paths.settings_file().exists() {
        settings.save(paths)?;
    }

    println!("Initialized ledger at: {}", storage.ledger.path().display());
    Ok(())
}

/// Handle `config`
pub fn handle_config_command(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let paths = storage.paths();

    println!("Expense Ledger Configuration");
    println!("============================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Ledger file:      {}", paths.transactions_file().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:       {}", settings.currency_symbol);
    println!("  Date format:           {}", settings.date_format);
    println!(
        "  Low-balance threshold: {}",
        settings.format_money(settings.low_balance_threshold)
    );
    println!("  Default period:        {}", settings.default_period);
    Ok(())
}
