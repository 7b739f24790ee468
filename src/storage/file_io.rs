//! Ledger file I/O with schema checks and atomic writes
//!
//! The persisted ledger is UTF-8 comma-delimited text with the header
//! `Date,Category,Description,Amount,Type`. Reads reject anything that does
//! not fit that schema; writes go to a temp file that is renamed into place.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::models::{Ledger, Money, Transaction};

/// Column names in their fixed order
pub const HEADER: [&str; 5] = ["Date", "Category", "Description", "Amount", "Type"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One persisted row, as text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct LedgerRow {
    date: String,
    category: String,
    description: String,
    amount: String,
    #[serde(rename = "Type")]
    type_label: String,
}

impl From<&Transaction> for LedgerRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date.format(DATE_FORMAT).to_string(),
            category: txn.category.clone(),
            description: txn.description.clone(),
            amount: txn.amount.to_decimal_string(),
            type_label: txn.type_label.clone(),
        }
    }
}

impl LedgerRow {
    fn into_transaction(self, source: &str, line: u64) -> Result<Transaction, LedgerError> {
        let date = parse_date(&self.date).ok_or_else(|| {
            LedgerError::Format(format!(
                "{} line {}: invalid date '{}'",
                source, line, self.date
            ))
        })?;
        let amount = Money::parse(&self.amount).map_err(|e| {
            LedgerError::Format(format!("{} line {}: {}", source, line, e))
        })?;

        Ok(Transaction::from_parts(
            date,
            self.category,
            self.description,
            amount,
            self.type_label,
        ))
    }
}

/// Parse a calendar date, tolerating a trailing time component
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Parse a ledger from any reader
///
/// `source` names the input in error messages.
pub fn parse_ledger<R: Read>(reader: R, source: &str) -> Result<Ledger, LedgerError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| LedgerError::Format(format!("{}: {}", source, e)))?
        .clone();
    let found: Vec<&str> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| if i == 0 { h.trim_start_matches('\u{feff}') } else { h })
        .map(str::trim)
        .collect();
    if found != HEADER {
        return Err(LedgerError::Format(format!(
            "{}: expected header '{}', found '{}'",
            source,
            HEADER.join(","),
            found.join(",")
        )));
    }

    let mut transactions = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| LedgerError::Format(format!("{}: {}", source, e)))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: LedgerRow = record.deserialize(None).map_err(|e| {
            LedgerError::Format(format!("{} line {}: {}", source, line, e))
        })?;
        transactions.push(row.into_transaction(source, line)?);
    }

    Ok(Ledger::from_transactions(transactions))
}

/// Write a ledger (header first, even when empty) to any writer
pub fn write_ledger<W: Write>(writer: W, ledger: &Ledger) -> Result<(), LedgerError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(HEADER)
        .map_err(|e| LedgerError::Storage(format!("Failed to write header: {}", e)))?;
    for txn in ledger {
        wtr.serialize(LedgerRow::from(txn))
            .map_err(|e| LedgerError::Storage(format!("Failed to write row: {}", e)))?;
    }
    wtr.flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    Ok(())
}

/// Read the ledger at `path`, returning an empty ledger if the file doesn't exist
pub fn read_ledger<P: AsRef<Path>>(path: P) -> Result<Ledger, LedgerError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Ledger::new());
    }

    read_ledger_required(path)
}

/// Read the ledger at `path`, returning `StoreNotFound` if the file doesn't exist
pub fn read_ledger_required<P: AsRef<Path>>(path: P) -> Result<Ledger, LedgerError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LedgerError::StoreNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    parse_ledger(BufReader::new(file), &path.display().to_string())
}

/// Write the ledger to `path` atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_ledger_atomic<P: AsRef<Path>>(path: P, ledger: &Ledger) -> Result<(), LedgerError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let result = (|| {
        let file = File::create(&temp_path)
            .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        write_ledger(&mut writer, ledger)?;

        writer
            .flush()
            .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, path)
            .map_err(|e| LedgerError::Storage(format!("Failed to rename temp file: {}", e)))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}
