//! Category CLI command

use crate::display::{format_category_list, format_used_categories};
use crate::error::LedgerResult;
use crate::models::category;
use crate::storage::Storage;

/// Handle `categories`: the registry, then the categories the ledger uses
pub fn handle_categories_command(storage: &Storage) -> LedgerResult<()> {
    print!("{}", format_category_list(category::entries()));
    println!();

    let used = storage.ledger.load()?.distinct_categories();
    print!("{}", format_used_categories(&used));
    Ok(())
}
