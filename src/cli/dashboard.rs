//! Dashboard command
//!
//! Renders the filtered overview the original dashboard page showed: KPI
//! cards, outflow breakdown by category, monthly inflow vs outflow and the
//! cumulative balance series.

use chrono::Datelike;
use clap::Args;

use crate::aggregate::{
    cumulative_balance_series, group_by_category, group_by_month_and_kind, totals, FilterWindow,
    MonthFilter,
};
use crate::config::Settings;
use crate::display::dashboard::{
    format_balance_series, format_category_breakdown, format_kpis, format_monthly_comparison,
    window_label,
};
use crate::error::{FintrackError, FintrackResult};
use crate::session::{LoadStatus, Session};

/// Arguments for `fintrack dashboard`
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Year to aggregate; defaults to the current year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Month to aggregate: a number 1-12, or "all" for the whole year
    #[arg(short, long, default_value = "all")]
    pub month: String,
}

/// Parse the month argument into a filter
fn parse_month(s: &str) -> FintrackResult<MonthFilter> {
    if s.eq_ignore_ascii_case("all") {
        return Ok(MonthFilter::All);
    }

    match s.parse::<u32>() {
        Ok(m) if (1..=12).contains(&m) => Ok(MonthFilter::Only(m)),
        _ => Err(FintrackError::validation(
            "month",
            format!("expected 1-12 or 'all', got '{}'", s),
        )),
    }
}

/// Handle `fintrack dashboard`
pub fn handle_dashboard_command(
    session: &Session,
    settings: &Settings,
    args: DashboardArgs,
) -> FintrackResult<()> {
    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    let window = FilterWindow {
        year,
        month: parse_month(&args.month)?,
    };

    println!("Dashboard: {}", window_label(window));
    println!("{}", "=".repeat(44));

    if session.status() == LoadStatus::Unavailable {
        println!("Backend unavailable: no entries could be loaded.");
        return Ok(());
    }

    let subset = session.filtered(window);
    let symbol = &settings.currency_symbol;

    let totals = totals(&subset);
    print!("{}", format_kpis(totals.as_ref(), symbol));
    println!();

    // The remaining sections only make sense when there is data.
    if totals.is_none() {
        return Ok(());
    }

    print!("{}", format_category_breakdown(&group_by_category(&subset), symbol));
    println!();
    print!(
        "{}",
        format_monthly_comparison(&group_by_month_and_kind(&subset), symbol)
    );
    println!();
    print!(
        "{}",
        format_balance_series(
            &cumulative_balance_series(&subset),
            symbol,
            &settings.date_format,
        )
    );

    Ok(())
}
