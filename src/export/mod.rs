//! Export module for the expense ledger
//!
//! Provides a machine-readable JSON snapshot of the dashboard for an
//! external charting front-end.

pub mod json;

pub use json::{export_dashboard_json, DashboardExport, EXPORT_SCHEMA_VERSION};
