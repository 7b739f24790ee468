//! Expense Ledger - personal income and expense tracking
//!
//! This library records dated income and expense transactions in a CSV
//! file and derives balances, category breakdowns and per-date series
//! from them. The derivations are pure functions of the ledger; nothing
//! derived is stored.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, transactions, the ledger and the category registry
//! - `storage`: CSV file storage layer
//! - `audit`: Audit logging system
//! - `services`: Filtering and validated transaction entry
//! - `reports`: Aggregation functions and the reports built on them
//! - `display`, `export`, `cli`: Terminal and JSON presentation
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
//! use expense_ledger::reports::analytics;
//! use expense_ledger::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let balance = analytics::balance(&storage.ledger.load()?);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
