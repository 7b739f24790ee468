//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod init;
pub mod report;
pub mod transaction;

pub use category::handle_categories_command;
pub use init::{handle_config_command, handle_init_command, InitArgs};
pub use report::{
    handle_export_command, handle_spending_command, handle_summary_command,
    handle_trends_command, ExportArgs, PeriodArgs,
};
pub use transaction::{handle_add_command, handle_list_command, AddArgs, Direction, ListArgs};
