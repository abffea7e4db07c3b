//! CLI command handlers
//!
//! Bridges clap argument parsing with the session, aggregation and display
//! layers.

pub mod dashboard;
pub mod entry;

pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use entry::{demo_records, handle_add_command, handle_export_command, handle_list_command, AddArgs};

use crate::session::{LoadStatus, ReloadReport, Session};

/// Print per-row validation warnings from a reload, plus a notice when the
/// backend could not be reached at all.
pub fn report_reload(session: &Session, report: &ReloadReport) {
    if session.status() == LoadStatus::Unavailable {
        eprintln!("Warning: backend unavailable; starting with an empty ledger.");
        return;
    }

    for (row, err) in &report.rejected {
        eprintln!("Warning: skipped row {}: {}", row + 1, err);
    }
}
