//! Audit logging for the expense ledger
//!
//! Records every store mutation (initialize, append) in an append-only
//! JSON-lines file next to the ledger.
//!
//! - `AuditEntry`: one log line with timestamp, operation and the appended record.
//! - `AuditLogger`: writes and reads the log file.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
