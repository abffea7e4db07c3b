//! Ledger Store
//!
//! An ordered, append-only collection of canonical transactions. Insertion
//! order is preserved but not semantically significant; aggregation re-sorts
//! by date where order matters. There is no update or delete: corrections
//! are new entries, and the only wholesale mutation is `replace_all` on
//! reload from the backing store.

use crate::models::Transaction;

/// In-memory ledger of canonical transactions
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger from an existing sequence
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Append a transaction, preserving insertion order
    pub fn append(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    /// All transactions, in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Replace the entire contents (used on reload from the backend)
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    /// Number of transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Kind, Money, PaymentMethod};
    use chrono::NaiveDate;

    fn txn(day: u32, cents: i64) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(2023, 10, day).unwrap(),
            description: format!("entry {}", day),
            category: Category::Other,
            kind: Kind::Outflow,
            amount: Money::from_cents(cents),
            payment_method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut ledger = Ledger::new();
        ledger.append(txn(10, 100));
        ledger.append(txn(1, 200));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.all()[0].amount.cents(), 100);
        assert_eq!(ledger.all()[1].amount.cents(), 200);
    }

    #[test]
    fn test_replace_all() {
        let mut ledger = Ledger::from_transactions(vec![txn(1, 100)]);
        ledger.replace_all(vec![txn(2, 200), txn(3, 300)]);

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.all()[0].amount.cents(), 200);
    }

    #[test]
    fn test_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert!(ledger.all().is_empty());
    }
}
