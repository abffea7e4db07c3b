//! Entry recording, listing and export commands

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::table::format_transaction_table;
use crate::error::{FintrackError, FintrackResult};
use crate::export::export_ledger_csv;
use crate::normalize::RawRecord;
use crate::session::Session;

/// Arguments for `fintrack add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Description of the entry
    pub description: String,

    /// Amount (e.g. "600.00"; always non-negative, kind carries the sign)
    pub amount: String,

    /// Entry kind: inflow or outflow
    #[arg(short, long, default_value = "outflow")]
    pub kind: String,

    /// Category (housing, food, transport, leisure, health, education,
    /// income, investment, other)
    #[arg(short, long, default_value = "other")]
    pub category: String,

    /// Entry date (DD/MM/YYYY); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Payment method (credit, debit, cash, instanttransfer, invoice)
    #[arg(short, long, default_value = "cash")]
    pub payment: String,
}

/// Handle `fintrack add`: normalize the raw input and persist it.
///
/// The input goes through the same Normalizer as backend rows, so a typo
/// in the category or a bad amount is reported here and nothing is saved.
pub fn handle_add_command(session: &mut Session, args: AddArgs) -> FintrackResult<()> {
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive().format("%d/%m/%Y").to_string());

    let raw = RawRecord::new()
        .with("date", date.as_str())
        .with("description", args.description.as_str())
        .with("category", args.category.as_str())
        .with("kind", args.kind.as_str())
        .with("amount", args.amount.as_str())
        .with("payment_method", args.payment.as_str());

    let txn = session.record(&raw)?;
    println!("Saved: {}", txn);
    Ok(())
}

/// Handle `fintrack list`: print the full ledger, most recent first
pub fn handle_list_command(session: &Session, settings: &Settings) -> FintrackResult<()> {
    print!(
        "{}",
        format_transaction_table(
            session.ledger().all(),
            &settings.currency_symbol,
            &settings.date_format,
        )
    );
    Ok(())
}

/// Handle `fintrack export`: write the ledger as CSV to a file or stdout
pub fn handle_export_command(session: &Session, output: Option<PathBuf>) -> FintrackResult<()> {
    let transactions = session.ledger().all();

    match output {
        Some(path) => {
            let file = std::fs::File::create(&path).map_err(|e| {
                FintrackError::Export(format!("cannot create {}: {}", path.display(), e))
            })?;
            export_ledger_csv(transactions, file)?;
            println!("Exported {} transactions to {}", transactions.len(), path.display());
        }
        None => {
            export_ledger_csv(transactions, std::io::stdout().lock())?;
        }
    }

    Ok(())
}

/// The demo dataset seeded by `fintrack init --demo`: two months of
/// example entries for first-run exploration.
pub fn demo_records() -> Vec<RawRecord> {
    let rows: [[&str; 6]; 7] = [
        ["01/10/2023", "Monthly salary", "Income", "Inflow", "5000.00", "InstantTransfer"],
        ["05/10/2023", "Rent", "Housing", "Outflow", "1500.00", "Invoice"],
        ["10/10/2023", "Supermarket", "Food", "Outflow", "600.00", "Credit"],
        ["15/10/2023", "Fuel", "Transport", "Outflow", "250.00", "Debit"],
        ["20/10/2023", "Cinema and dinner", "Leisure", "Outflow", "300.00", "Credit"],
        ["01/11/2023", "Monthly salary", "Income", "Inflow", "5000.00", "InstantTransfer"],
        ["05/11/2023", "Rent", "Housing", "Outflow", "1500.00", "Invoice"],
    ];

    rows.iter()
        .map(|row| {
            let row: Vec<String> = row.iter().map(|s| s.to_string()).collect();
            RawRecord::from_row(&row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::normalize::normalize;

    #[test]
    fn test_demo_records_all_normalize() {
        for record in demo_records() {
            normalize(&record).unwrap();
        }
        assert_eq!(demo_records().len(), 7);
    }

    #[test]
    fn test_add_rejects_bad_category() {
        let mut session = Session::new(Box::new(MemoryBackend::new()));
        let args = AddArgs {
            description: "Groceries".to_string(),
            amount: "600.00".to_string(),
            kind: "outflow".to_string(),
            category: "grocery".to_string(),
            date: Some("10/10/2023".to_string()),
            payment: "cash".to_string(),
        };

        let err = handle_add_command(&mut session, args).unwrap_err();
        assert_eq!(err.field(), Some("category"));
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_add_saves_valid_entry() {
        let mut session = Session::new(Box::new(MemoryBackend::new()));
        let args = AddArgs {
            description: "Groceries".to_string(),
            amount: "600.00".to_string(),
            kind: "outflow".to_string(),
            category: "food".to_string(),
            date: Some("10/10/2023".to_string()),
            payment: "credit".to_string(),
        };

        handle_add_command(&mut session, args).unwrap();
        assert_eq!(session.ledger().len(), 1);
    }
}
