use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_ledger::cli::{
    handle_add_command, handle_categories_command, handle_config_command, handle_export_command,
    handle_init_command, handle_list_command, handle_spending_command, handle_summary_command,
    handle_trends_command, AddArgs, ExportArgs, InitArgs, ListArgs, PeriodArgs,
};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
use expense_ledger::storage::Storage;

#[derive(Parser, Debug)]
#[command(
    name = "ledger",
    version,
    about = "Personal income and expense ledger",
    long_about = "Records income and expense transactions in a CSV ledger and \
                  derives balances, category breakdowns and trends from it."
)]
struct Cli {
    /// Log level; RUST_LOG overrides it when set
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create (or reset) the ledger file
    Init(InitArgs),

    /// Record an income or expense
    Add(AddArgs),

    /// Show balance, income, expenses and savings rate
    Summary(PeriodArgs),

    /// Show transaction history, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show expenses by category
    Spending(PeriodArgs),

    /// Show per-date income, expense and running balance
    Trends(PeriodArgs),

    /// List known categories and the ones used in the ledger
    Categories,

    /// Export a JSON dashboard snapshot
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level.to_string().to_lowercase());
    trace!("{cli:?}");

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths)?;

    match cli.command {
        Commands::Init(args) => handle_init_command(&storage, &settings, args)?,
        Commands::Add(args) => handle_add_command(&storage, &settings, args)?,
        Commands::Summary(args) => handle_summary_command(&storage, &settings, args)?,
        Commands::List(args) => handle_list_command(&storage, &settings, args)?,
        Commands::Spending(args) => handle_spending_command(&storage, &settings, args)?,
        Commands::Trends(args) => handle_trends_command(&storage, &settings, args)?,
        Commands::Categories => handle_categories_command(&storage)?,
        Commands::Export(args) => handle_export_command(&storage, &settings, args)?,
        Commands::Config => handle_config_command(&storage, &settings)?,
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "expense_ledger={},{}={}",
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
