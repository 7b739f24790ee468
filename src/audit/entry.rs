//! Audit entry data structures
//!
//! Defines the structure of audit log entries. The ledger only ever grows or
//! is reset, so the operations are limited to those two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of store mutations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Ledger was reset to an empty, header-only file
    Initialize,
    /// A transaction was appended
    Append,
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Position of the affected transaction in the ledger, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,

    /// Human-readable description (e.g. "2024-01-01 🍔 Food -200.00")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON representation of the appended transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create an entry for an appended record
    pub fn append<T: Serialize>(position: usize, entity_name: Option<String>, entity: &T) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Append,
            position: Some(position),
            entity_name,
            after: serde_json::to_value(entity).ok(),
        }
    }

    /// Create an entry for a ledger reset
    pub fn initialize() -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Initialize,
            position: None,
            entity_name: None,
            after: None,
        }
    }
}
