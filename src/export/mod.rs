//! Export functionality
//!
//! Serializes the ledger to delimited text for download or re-ingestion.

pub mod csv;

pub use csv::{export_ledger_csv, transaction_row};
