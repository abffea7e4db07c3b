//! CSV export
//!
//! Fixed column order `date, description, category, kind, amount,
//! payment_method`, dates as `DD/MM/YYYY`, amounts with two decimal places.
//! The same row encoding feeds backend appends, so an exported ledger
//! re-parses through the Normalizer into equal transactions.

use std::io::Write;

use csv::WriterBuilder;

use crate::error::{FintrackError, FintrackResult};
use crate::models::Transaction;
use crate::normalize::FIELDS;

/// Encode a transaction as an ordered row of scalar strings
pub fn transaction_row(txn: &Transaction) -> [String; 6] {
    [
        txn.date.format("%d/%m/%Y").to_string(),
        txn.description.clone(),
        txn.category.name().to_string(),
        txn.kind.name().to_string(),
        txn.amount.to_decimal_string(),
        txn.payment_method.name().to_string(),
    ]
}

/// Write the ledger as CSV with a header row
pub fn export_ledger_csv<W: Write>(transactions: &[Transaction], writer: W) -> FintrackResult<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer
        .write_record(FIELDS)
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    for txn in transactions {
        csv_writer
            .write_record(transaction_row(txn).iter())
            .map_err(|e| FintrackError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}
