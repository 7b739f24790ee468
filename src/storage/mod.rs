//! Storage layer for the expense ledger
//!
//! Provides the CSV-backed ledger store with atomic rewrites, plus the
//! audit trail that records every mutation.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_ledger, write_ledger_atomic};
pub use ledger::LedgerStore;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::{Ledger, Transaction};

/// Storage coordinator that owns the ledger store and the audit log
pub struct Storage {
    paths: LedgerPaths,
    pub ledger: LedgerStore,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating the data directories
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerStore::new(paths.transactions_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Whether a ledger file has been written yet
    pub fn is_initialized(&self) -> bool {
        self.ledger.exists()
    }

    /// Reset the ledger to an empty, header-only file and audit it
    pub fn initialize(&self) -> Result<(), LedgerError> {
        self.ledger
            .initialize_then(|| self.audit.log(&AuditEntry::initialize()))
    }

    /// Append `txn` to the ledger and audit it under the store's write lock
    ///
    /// Audit positions therefore follow ledger order even when appends race.
    pub fn append_transaction(&self, txn: Transaction) -> Result<Ledger, LedgerError> {
        self.ledger.append_then(txn, |ledger| {
            let position = ledger.len() - 1;
            match ledger.transactions().last() {
                Some(appended) => self.audit.log(&AuditEntry::append(
                    position,
                    Some(appended.to_string()),
                    appended,
                )),
                None => Ok(()),
            }
        })
    }
}
