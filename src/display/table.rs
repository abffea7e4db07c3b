//! Data table formatting
//!
//! Register-style view of the raw ledger, most recent entries first, with
//! formatted dates and amounts.

use super::{format_currency, format_date, truncate};
use crate::models::{Kind, Transaction};

/// Format the full ledger as a table, sorted most-recent-first
pub fn format_transaction_table(
    transactions: &[Transaction],
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:24} {:12} {:8} {:>14} {:16}\n",
        "Date", "Description", "Category", "Kind", "Amount", "Payment"
    ));
    output.push_str(&"-".repeat(90));
    output.push('\n');

    for txn in &sorted {
        let amount = match txn.kind {
            Kind::Inflow => format_currency(txn.amount, symbol),
            Kind::Outflow => format!("-{}", format_currency(txn.amount, symbol)),
        };

        output.push_str(&format!(
            "{} {} {} {:8} {:>14} {:16}\n",
            format_date(txn.date, date_format),
            truncate(&txn.description, 24),
            truncate(txn.category.name(), 12),
            txn.kind.name(),
            amount,
            txn.payment_method.name()
        ));
    }

    output.push_str(&"-".repeat(90));
    output.push('\n');
    output.push_str(&format!("{} transactions\n", sorted.len()));

    output
}
