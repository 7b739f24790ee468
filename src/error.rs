//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Caller-side validation errors, raised before anything reaches the store
    #[error("Validation error: {0}")]
    Validation(String),

    /// No persisted ledger exists at the expected location
    #[error("Ledger not found: {}", path.display())]
    StoreNotFound { path: PathBuf },

    /// Persisted ledger violates the fixed five-column schema
    #[error("Malformed ledger: {0}")]
    Format(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Check if this is a missing-ledger error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StoreNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a schema/format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_store_not_found_display() {
        let err = LedgerError::StoreNotFound {
            path: PathBuf::from("data/transactions.csv"),
        };
        assert_eq!(err.to_string(), "Ledger not found: data/transactions.csv");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }

    #[test]
    fn test_validation_predicate() {
        assert!(LedgerError::Validation("amount".into()).is_validation());
        assert!(!LedgerError::Format("bad".into()).is_validation());
        assert!(LedgerError::Format("bad".into()).is_format());
        assert!(!LedgerError::Storage("disk".into()).is_not_found());
    }
}
