//! Transaction model
//!
//! A canonical ledger entry: date, description, closed-set category, kind,
//! non-negative amount and payment method. The sign convention lives in
//! `kind` — an amount is never negative, and corrections are new entries
//! rather than edits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::money::Money;

/// Direction of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Money received
    Inflow,
    /// Money spent
    Outflow,
}

impl Kind {
    /// Canonical name, used for display and export
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Inflow => "Inflow",
            Kind::Outflow => "Outflow",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inflow" | "entrada" => Ok(Kind::Inflow),
            "outflow" | "saída" | "saida" => Ok(Kind::Outflow),
            _ => Err(format!("unknown kind: '{}'", s.trim())),
        }
    }
}

/// How the transaction was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Credit,
    Debit,
    Cash,
    InstantTransfer,
    Invoice,
}

impl PaymentMethod {
    /// Canonical name, used for display and export
    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Credit => "Credit",
            PaymentMethod::Debit => "Debit",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::InstantTransfer => "InstantTransfer",
            PaymentMethod::Invoice => "Invoice",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "credit" | "crédito" | "credito" => Ok(PaymentMethod::Credit),
            "debit" | "débito" | "debito" => Ok(PaymentMethod::Debit),
            "cash" | "dinheiro" => Ok(PaymentMethod::Cash),
            "instanttransfer" | "instant transfer" | "pix" => Ok(PaymentMethod::InstantTransfer),
            "invoice" | "boleto" => Ok(PaymentMethod::Invoice),
            _ => Err(format!("unknown payment method: '{}'", s.trim())),
        }
    }
}

/// A canonical ledger entry, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date (no time component)
    pub date: NaiveDate,

    /// Free text, non-empty after normalization
    pub description: String,

    /// Spending/income category
    pub category: Category,

    /// Inflow or outflow; carries the sign for `amount`
    pub kind: Kind,

    /// Non-negative amount in cents
    pub amount: Money,

    /// Payment method
    pub payment_method: PaymentMethod,
}

impl Transaction {
    /// The amount with its sign applied: positive for inflows, negative
    /// for outflows.
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            Kind::Inflow => self.amount,
            Kind::Outflow => -self.amount,
        }
    }

    /// Check if this is an inflow
    pub fn is_inflow(&self) -> bool {
        self.kind == Kind::Inflow
    }

    /// Check if this is an outflow
    pub fn is_outflow(&self) -> bool {
        self.kind == Kind::Outflow
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%d/%m/%Y"),
            self.description,
            self.kind,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: Kind, cents: i64) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(2023, 10, 5).unwrap(),
            description: "Rent".to_string(),
            category: Category::Housing,
            kind,
            amount: Money::from_cents(cents),
            payment_method: PaymentMethod::Invoice,
        }
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(sample(Kind::Inflow, 5000).signed_amount().cents(), 5000);
        assert_eq!(sample(Kind::Outflow, 5000).signed_amount().cents(), -5000);
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Inflow".parse::<Kind>().unwrap(), Kind::Inflow);
        assert_eq!("Entrada".parse::<Kind>().unwrap(), Kind::Inflow);
        assert_eq!("Saída".parse::<Kind>().unwrap(), Kind::Outflow);
        assert!("sideways".parse::<Kind>().is_err());
    }

    #[test]
    fn test_payment_method_parsing() {
        assert_eq!(
            "Pix".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::InstantTransfer
        );
        assert_eq!(
            "Boleto".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::Invoice
        );
        assert_eq!(
            "credit".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::Credit
        );
        assert!("iou".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_serialization_round_trip() {
        let txn = sample(Kind::Outflow, 150000);
        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
    }

    #[test]
    fn test_display() {
        let txn = sample(Kind::Outflow, 150000);
        assert_eq!(format!("{}", txn), "05/10/2023 Rent Outflow 1500.00");
    }
}
