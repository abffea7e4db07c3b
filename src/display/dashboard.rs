//! Dashboard formatting
//!
//! Renders aggregated results as the terminal dashboard: KPI cards,
//! category breakdown with percentages, monthly inflow vs outflow
//! comparison and the running balance series. A `None` totals value means
//! "no data for the period" and renders as such — never as a zero balance.

use chrono::NaiveDate;

use super::{format_currency, format_date, month_name};
use crate::aggregate::{FilterWindow, MonthFilter, MonthKindTotal, Totals};
use crate::models::{Category, Kind, Money};

/// Human-readable label for a filter window, e.g. "October 2023" or
/// "2023 (all months)"
pub fn window_label(window: FilterWindow) -> String {
    match window.month {
        MonthFilter::All => format!("{} (all months)", window.year),
        MonthFilter::Only(m) => format!("{} {}", month_name(m), window.year),
    }
}

/// Format the KPI cards: balance, inflow, outflow and savings rate
pub fn format_kpis(totals: Option<&Totals>, symbol: &str) -> String {
    let Some(totals) = totals else {
        return "No data for the selected period.\n".to_string();
    };

    let mut output = String::new();
    output.push_str(&format!(
        "Balance:      {}\n",
        format_currency(totals.balance, symbol)
    ));
    output.push_str(&format!(
        "Inflow:       {}\n",
        format_currency(totals.inflow_total, symbol)
    ));
    output.push_str(&format!(
        "Outflow:      {}\n",
        format_currency(totals.outflow_total, symbol)
    ));
    output.push_str(&format!("Savings rate: {:.1}%\n", totals.savings_rate));
    output
}

/// Format the outflow-by-category breakdown with proportional percentages
pub fn format_category_breakdown(breakdown: &[(Category, Money)], symbol: &str) -> String {
    if breakdown.is_empty() {
        return "No outflow in this period.\n".to_string();
    }

    let total: Money = breakdown.iter().map(|(_, sum)| *sum).sum();

    let mut output = String::new();
    output.push_str("Outflow by category\n");
    output.push_str(&"-".repeat(44));
    output.push('\n');

    for (category, sum) in breakdown {
        let percentage = if total.is_zero() {
            0.0
        } else {
            sum.cents() as f64 / total.cents() as f64 * 100.0
        };
        output.push_str(&format!(
            "{:<14} {:>14} {:>7.1}%\n",
            category.name(),
            format_currency(*sum, symbol),
            percentage
        ));
    }

    output.push_str(&"-".repeat(44));
    output.push('\n');
    output.push_str(&format!(
        "{:<14} {:>14}\n",
        "Total",
        format_currency(total, symbol)
    ));
    output
}

/// Format the inflow vs outflow comparison per month
pub fn format_monthly_comparison(buckets: &[MonthKindTotal], symbol: &str) -> String {
    if buckets.is_empty() {
        return "No data for the selected period.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {:>14} {:>14}\n",
        "Month", "Inflow", "Outflow"
    ));
    output.push_str(&"-".repeat(40));
    output.push('\n');

    let mut months: Vec<u32> = buckets.iter().map(|b| b.month).collect();
    months.dedup();

    for month in months {
        let sum_for = |kind: Kind| -> Money {
            buckets
                .iter()
                .filter(|b| b.month == month && b.kind == kind)
                .map(|b| b.total)
                .sum()
        };

        output.push_str(&format!(
            "{:<10} {:>14} {:>14}\n",
            month_name(month),
            format_currency(sum_for(Kind::Inflow), symbol),
            format_currency(sum_for(Kind::Outflow), symbol),
        ));
    }

    output
}

/// Format the cumulative balance series, one point per transaction
pub fn format_balance_series(
    series: &[(NaiveDate, Money)],
    symbol: &str,
    date_format: &str,
) -> String {
    if series.is_empty() {
        return "No data for the selected period.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Balance over time\n");
    output.push_str(&"-".repeat(28));
    output.push('\n');

    for (date, balance) in series {
        output.push_str(&format!(
            "{} {:>15}\n",
            format_date(*date, date_format),
            format_currency(*balance, symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_label() {
        assert_eq!(window_label(FilterWindow::month(2023, 10)), "October 2023");
        assert_eq!(window_label(FilterWindow::year(2023)), "2023 (all months)");
    }

    #[test]
    fn test_kpis_no_data_distinct_from_zero() {
        let none = format_kpis(None, "$");
        assert!(none.contains("No data"));

        let zeroed = Totals {
            inflow_total: Money::zero(),
            outflow_total: Money::zero(),
            balance: Money::zero(),
            savings_rate: 0.0,
        };
        let some = format_kpis(Some(&zeroed), "$");
        assert!(some.contains("Balance:      $0.00"));
        assert!(!some.contains("No data"));
    }

    #[test]
    fn test_kpis_formatting() {
        let totals = Totals {
            inflow_total: Money::from_cents(500000),
            outflow_total: Money::from_cents(210000),
            balance: Money::from_cents(290000),
            savings_rate: 58.0,
        };
        let output = format_kpis(Some(&totals), "$");
        assert!(output.contains("$2,900.00"));
        assert!(output.contains("$5,000.00"));
        assert!(output.contains("58.0%"));
    }

    #[test]
    fn test_category_breakdown_percentages() {
        let breakdown = vec![
            (Category::Housing, Money::from_cents(150000)),
            (Category::Food, Money::from_cents(50000)),
        ];
        let output = format_category_breakdown(&breakdown, "$");
        assert!(output.contains("Housing"));
        assert!(output.contains("75.0%"));
        assert!(output.contains("25.0%"));
        assert!(output.contains("$2,000.00"));
    }

    #[test]
    fn test_monthly_comparison_pairs_kinds() {
        let buckets = vec![
            MonthKindTotal {
                month: 10,
                kind: Kind::Inflow,
                total: Money::from_cents(500000),
            },
            MonthKindTotal {
                month: 10,
                kind: Kind::Outflow,
                total: Money::from_cents(210000),
            },
            MonthKindTotal {
                month: 11,
                kind: Kind::Inflow,
                total: Money::from_cents(500000),
            },
        ];
        let output = format_monthly_comparison(&buckets, "$");
        assert!(output.contains("October"));
        assert!(output.contains("November"));
        // November has no outflow bucket; it renders as zero.
        assert!(output.lines().any(|l| l.contains("November") && l.contains("$0.00")));
    }

    #[test]
    fn test_balance_series() {
        let series = vec![(
            NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            Money::from_cents(500000),
        )];
        let output = format_balance_series(&series, "$", "%d/%m/%Y");
        assert!(output.contains("01/10/2023"));
        assert!(output.contains("$5,000.00"));

        let output = format_balance_series(&series, "$", "%Y-%m-%d");
        assert!(output.contains("2023-10-01"));
    }
}
