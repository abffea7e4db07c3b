//! Normalizer: raw records into canonical transactions
//!
//! Raw records arrive from heterogeneous backends (spreadsheet rows, CSV
//! files) as string-keyed maps of loosely typed scalars. Normalization is a
//! pure function: it either produces a canonical [`Transaction`] or fails
//! with a validation error naming the offending field. Nothing invalid ever
//! reaches the ledger.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Category, Kind, Money, PaymentMethod, Transaction};

/// Field names of a raw record, in backend column order
pub const FIELDS: [&str; 6] = [
    "date",
    "description",
    "category",
    "kind",
    "amount",
    "payment_method",
];

/// Date formats accepted from textual sources. `%d/%m/%y` must come
/// before `%d/%m/%Y`: chrono's `%Y` also matches 1-2 digit years, so the
/// other order would read "05/10/23" as year 23. A four-digit year fails
/// `%y` on the trailing digits and falls through to the export format, so
/// exported ledgers still re-ingest cleanly.
const DATE_FORMATS: [&str; 4] = ["%d/%m/%y", "%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y"];

/// A raw, not-yet-validated record from a backend
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    values: HashMap<String, Value>,
}

impl RawRecord {
    /// Create an empty raw record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    /// Set a field
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Get a field value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Build a record from an ordered row of strings matching [`FIELDS`]
    pub fn from_row(row: &[String]) -> Self {
        let mut record = Self::new();
        for (key, value) in FIELDS.iter().zip(row.iter()) {
            record.set(key, value.as_str());
        }
        record
    }
}

/// Normalize a raw record into a canonical transaction.
///
/// Pure; the only failure mode is [`FintrackError::Validation`] with the
/// name of the first offending field.
pub fn normalize(record: &RawRecord) -> FintrackResult<Transaction> {
    let date = parse_date_field(record)?;
    let description = parse_description_field(record)?;
    let category = parse_enum_field::<Category>(record, "category")?;
    let kind = parse_enum_field::<Kind>(record, "kind")?;
    let amount = parse_amount_field(record)?;
    let payment_method = parse_enum_field::<PaymentMethod>(record, "payment_method")?;

    Ok(Transaction {
        date,
        description,
        category,
        kind,
        amount,
        payment_method,
    })
}

fn missing(field: &'static str) -> FintrackError {
    FintrackError::validation(field, "missing field")
}

fn parse_date_field(record: &RawRecord) -> FintrackResult<NaiveDate> {
    let value = record.get("date").ok_or_else(|| missing("date"))?;
    let text = value
        .as_str()
        .ok_or_else(|| FintrackError::validation("date", format!("not a date: {}", value)))?
        .trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Ok(date);
        }
    }

    Err(FintrackError::validation(
        "date",
        format!("could not parse date: '{}'", text),
    ))
}

fn parse_description_field(record: &RawRecord) -> FintrackResult<String> {
    let value = record
        .get("description")
        .ok_or_else(|| missing("description"))?;
    let text = value.as_str().map(str::trim).unwrap_or_default();

    if text.is_empty() {
        return Err(FintrackError::validation(
            "description",
            "description must not be empty",
        ));
    }

    Ok(text.to_string())
}

fn parse_enum_field<T>(record: &RawRecord, field: &'static str) -> FintrackResult<T>
where
    T: std::str::FromStr<Err = String>,
{
    let value = record.get(field).ok_or_else(|| missing(field))?;
    let text = value
        .as_str()
        .ok_or_else(|| FintrackError::validation(field, format!("not a string: {}", value)))?;

    text.parse::<T>()
        .map_err(|reason| FintrackError::validation(field, reason))
}

fn parse_amount_field(record: &RawRecord) -> FintrackResult<Money> {
    let value = record.get("amount").ok_or_else(|| missing("amount"))?;

    let amount = match value {
        Value::Number(n) => number_to_money(n)
            .ok_or_else(|| FintrackError::validation("amount", format!("not a number: {}", n)))?,
        Value::String(s) => parse_amount_string(s)
            .ok_or_else(|| FintrackError::validation("amount", format!("not a number: '{}'", s)))?,
        other => {
            return Err(FintrackError::validation(
                "amount",
                format!("not a number: {}", other),
            ))
        }
    };

    if amount.is_negative() {
        return Err(FintrackError::validation(
            "amount",
            format!(
                "amount must not be negative: {} (use kind=Outflow for spending)",
                amount
            ),
        ));
    }

    Ok(amount)
}

fn number_to_money(n: &serde_json::Number) -> Option<Money> {
    if let Some(i) = n.as_i64() {
        return i.checked_mul(100).map(Money::from_cents);
    }
    let f = n.as_f64()?;
    if !f.is_finite() {
        return None;
    }
    Some(Money::from_cents((f * 100.0).round() as i64))
}

/// Permissive numeric coercion for textual amounts.
///
/// Strips currency symbols and whitespace, then accepts both the
/// `1,234.56` and the `1.234,56` separator conventions. When only one
/// separator character appears, it is a decimal separator if it occurs
/// once with one or two digits after it; otherwise it is grouping, so
/// "1.500" and "5,000" are both whole thousands. Returns `None` when no
/// digits survive the cleanup.
fn parse_amount_string(s: &str) -> Option<Money> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();

    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    if digits.is_empty() || digits.contains('-') {
        return None;
    }

    let last_dot = digits.rfind('.');
    let last_comma = digits.rfind(',');

    // Pick the decimal separator; everything else is grouping noise.
    let decimal_pos = match (last_dot, last_comma) {
        (Some(d), Some(c)) => Some(d.max(c)),
        (Some(p), None) | (None, Some(p)) => {
            let sep = digits.as_bytes()[p] as char;
            let frac_len = digits.len() - p - 1;
            if digits.matches(sep).count() == 1 && (1..=2).contains(&frac_len) {
                Some(p)
            } else {
                None
            }
        }
        (None, None) => None,
    };

    let (units_part, frac_part) = match decimal_pos {
        Some(pos) => (&digits[..pos], &digits[pos + 1..]),
        None => (digits, ""),
    };

    let units: String = units_part.chars().filter(char::is_ascii_digit).collect();
    let frac: String = frac_part.chars().filter(char::is_ascii_digit).collect();
    if frac_part.len() != frac.len() {
        // Separator characters after the decimal point: not a number.
        return None;
    }

    let units: i64 = if units.is_empty() {
        0
    } else {
        units.parse().ok()?
    };

    let cents_frac: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac[..2].parse().ok()?,
    };

    let cents = units.checked_mul(100)?.checked_add(cents_frac)?;
    Some(Money::from_cents(if negative { -cents } else { cents }))
}
