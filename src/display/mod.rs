//! Presentation Adapter
//!
//! Maps aggregated results into display-ready strings: currency formatting
//! with symbol and thousands separators, month labels, KPI cards and table
//! views. Pure formatting; no business logic lives here.

pub mod dashboard;
pub mod table;

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::models::Money;

/// Format a monetary amount with a currency symbol and thousands
/// separators, e.g. `$5,000.00` or `-$2,100.50`.
pub fn format_currency(amount: Money, symbol: &str) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        group_thousands(amount.units().abs()),
        amount.cents_part()
    )
}

/// Render a date with the configured strftime format, falling back to
/// `%d/%m/%Y` when the format string is invalid. This is display only;
/// the export date format is fixed.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(format)) {
        Ok(()) => out,
        Err(_) => date.format("%d/%m/%Y").to_string(),
    }
}

/// Calendar month name for a month number (1-12)
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Insert comma separators into a non-negative integer
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Truncate a string to a maximum length, padding shorter ones
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let prefix: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", prefix)
    }
}
