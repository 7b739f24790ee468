//! Ledger store for the persisted transaction file
//!
//! Loads the whole ledger into memory and rewrites the whole file on every
//! change. Mutations through one store are serialized by a lock held across
//! load-mutate-save, so two appends never overwrite each other.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::error::LedgerError;
use crate::models::{category, Ledger, Transaction};

use super::file_io::{read_ledger, read_ledger_required, write_ledger_atomic};

/// Durable append-only transaction store
pub struct LedgerStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LedgerStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a persisted ledger file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the persisted ledger; a missing file yields an empty ledger
    pub fn load(&self) -> Result<Ledger, LedgerError> {
        let ledger = read_ledger(&self.path)?;
        debug!(
            path = %self.path.display(),
            count = ledger.len(),
            "Loaded ledger"
        );
        Ok(ledger)
    }

    /// Load the persisted ledger, failing with `StoreNotFound` if absent
    pub fn load_existing(&self) -> Result<Ledger, LedgerError> {
        read_ledger_required(&self.path)
    }

    /// Write an empty ledger with the full header, replacing any existing file
    ///
    /// Creates missing parent directories. Calling it repeatedly leaves the
    /// same file behind.
    pub fn initialize(&self) -> Result<(), LedgerError> {
        self.initialize_then(|| Ok(()))
    }

    /// Like `initialize`, running `after_save` before the lock is released
    pub fn initialize_then<F>(&self, after_save: F) -> Result<(), LedgerError>
    where
        F: FnOnce() -> Result<(), LedgerError>,
    {
        let _guard = self.lock()?;
        write_ledger_atomic(&self.path, &Ledger::new())?;
        info!(path = %self.path.display(), "Initialized empty ledger");
        after_save()
    }

    /// Fully rewrite the persisted ledger from `ledger`
    pub fn save(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        let _guard = self.lock()?;
        self.save_unlocked(ledger)
    }

    /// Append `txn` to the persisted ledger and return the new ledger
    ///
    /// Load, append and save happen under one lock.
    pub fn append(&self, txn: Transaction) -> Result<Ledger, LedgerError> {
        self.append_then(txn, |_| Ok(()))
    }

    /// Like `append`, running `after_save` on the saved ledger before the
    /// lock is released
    ///
    /// Side records keyed by ledger position (the audit log) are written from
    /// `after_save` so they land in the same order as the rows.
    pub fn append_then<F>(&self, txn: Transaction, after_save: F) -> Result<Ledger, LedgerError>
    where
        F: FnOnce(&Ledger) -> Result<(), LedgerError>,
    {
        let _guard = self.lock()?;

        if !category::is_known(&txn.category) {
            warn!(category = %txn.category, "Appending transaction with unregistered category");
        }

        let ledger = read_ledger(&self.path)?.append(txn);
        self.save_unlocked(&ledger)?;
        info!(count = ledger.len(), "Appended transaction");
        after_save(&ledger)?;
        Ok(ledger)
    }

    fn save_unlocked(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        write_ledger_atomic(&self.path, ledger)?;
        debug!(
            path = %self.path.display(),
            count = ledger.len(),
            "Saved ledger"
        );
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, LedgerError> {
        self.write_lock
            .lock()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
