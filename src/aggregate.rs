//! Aggregator: derived views over the ledger
//!
//! Turns a filtered slice of canonical transactions into dashboard KPIs,
//! category breakdowns, monthly inflow/outflow comparisons and a running
//! balance series. Every operation here is pure and total over canonical
//! data: given valid transactions nothing in this module can fail, so the
//! only fallible layer stays at the ingest boundary.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Category, Kind, Money, Transaction};

/// Month restriction of a filter window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    /// Every month of the year
    All,
    /// A single calendar month (1-12)
    Only(u32),
}

/// The (year, optional month) pair restricting which transactions an
/// aggregation considers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterWindow {
    pub year: i32,
    pub month: MonthFilter,
}

impl FilterWindow {
    /// Window covering a whole year
    pub fn year(year: i32) -> Self {
        Self {
            year,
            month: MonthFilter::All,
        }
    }

    /// Window covering a single month of a year
    pub fn month(year: i32, month: u32) -> Self {
        Self {
            year,
            month: MonthFilter::Only(month),
        }
    }

    /// Check whether a date falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        if date.year() != self.year {
            return false;
        }
        match self.month {
            MonthFilter::All => true,
            MonthFilter::Only(m) => date.month() == m,
        }
    }
}

/// Select the transactions inside a filter window.
///
/// Result order is unspecified by contract; in practice ledger insertion
/// order is preserved, and consumers that care about date order sort.
pub fn filter(transactions: &[Transaction], window: FilterWindow) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| window.contains(t.date))
        .cloned()
        .collect()
}

/// KPI totals for a non-empty filtered subsequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Sum of inflow amounts
    pub inflow_total: Money,
    /// Sum of outflow amounts
    pub outflow_total: Money,
    /// `inflow_total - outflow_total`
    pub balance: Money,
    /// Balance as a percentage of inflow, 0.0 when there is no inflow
    pub savings_rate: f64,
}

/// Compute KPI totals over a filtered subsequence.
///
/// Returns `None` for an empty subsequence so callers can tell "no data
/// for this period" apart from a genuinely zero balance. The savings rate
/// is defined as 0 when there is no inflow; that is a policy (the
/// zero-division guard), not an incidental default.
pub fn totals(transactions: &[Transaction]) -> Option<Totals> {
    if transactions.is_empty() {
        return None;
    }

    let inflow_total: Money = transactions
        .iter()
        .filter(|t| t.is_inflow())
        .map(|t| t.amount)
        .sum();
    let outflow_total: Money = transactions
        .iter()
        .filter(|t| t.is_outflow())
        .map(|t| t.amount)
        .sum();
    let balance = inflow_total - outflow_total;

    let savings_rate = if inflow_total.is_positive() {
        balance.cents() as f64 / inflow_total.cents() as f64 * 100.0
    } else {
        0.0
    };

    Some(Totals {
        inflow_total,
        outflow_total,
        balance,
        savings_rate,
    })
}

/// Sum outflow amounts per category.
///
/// Categories without outflow in the period are omitted. Values are
/// non-negative and sum to `outflow_total` for the same subsequence, so
/// the result renders directly as a proportional breakdown. Ordered
/// largest first, ties broken by category order.
pub fn group_by_category(transactions: &[Transaction]) -> Vec<(Category, Money)> {
    let mut by_category: BTreeMap<Category, Money> = BTreeMap::new();
    for txn in transactions.iter().filter(|t| t.is_outflow()) {
        *by_category.entry(txn.category).or_insert_with(Money::zero) += txn.amount;
    }

    let mut breakdown: Vec<(Category, Money)> = by_category
        .into_iter()
        .filter(|(_, sum)| !sum.is_zero())
        .collect();
    breakdown.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    breakdown
}

/// A (month, kind) bucket of summed amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthKindTotal {
    /// Calendar month number (1-12)
    pub month: u32,
    pub kind: Kind,
    pub total: Money,
}

/// Sum amounts grouped by (month number, kind), ordered by month then
/// kind. Used to compare inflow vs outflow per month across the filtered
/// range; month labels are a presentation concern.
pub fn group_by_month_and_kind(transactions: &[Transaction]) -> Vec<MonthKindTotal> {
    let mut buckets: BTreeMap<(u32, Kind), Money> = BTreeMap::new();
    for txn in transactions {
        *buckets
            .entry((txn.date.month(), txn.kind))
            .or_insert_with(Money::zero) += txn.amount;
    }

    buckets
        .into_iter()
        .map(|((month, kind), total)| MonthKindTotal { month, kind, total })
        .collect()
}

/// Running balance within the filter window.
///
/// Sorts ascending by date (stable, so equal dates keep their ledger
/// order), maps each transaction to a signed delta and produces the prefix
/// sums. The series starts from zero at the beginning of the window: it
/// does not carry balance over from outside the filter. A lifetime running
/// balance would have to aggregate the unfiltered ledger and is out of
/// scope here.
pub fn cumulative_balance_series(transactions: &[Transaction]) -> Vec<(NaiveDate, Money)> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by_key(|t| t.date);

    let mut running = Money::zero();
    sorted
        .into_iter()
        .map(|t| {
            running += t.signed_amount();
            (t.date, running)
        })
        .collect()
}
