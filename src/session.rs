//! Session context
//!
//! Owns the ledger store, the backend collaborator and an explicit load
//! status. The ledger has a clear lifecycle: empty until `reload`, rebuilt
//! wholesale from the backend on every reload, grown one entry at a time by
//! `record`. There is no implicit first-access initialization and no
//! partial sync. Single active session, single writer.

use crate::aggregate::{filter, FilterWindow};
use crate::backend::Backend;
use crate::error::{FintrackError, FintrackResult};
use crate::export::transaction_row;
use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::normalize::{normalize, RawRecord};

/// Whether the ledger reflects a reachable backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// `reload` has not run yet
    #[default]
    NotLoaded,
    /// Ledger was rebuilt from a reachable backend
    Loaded,
    /// Backend could not be reached; the ledger is empty, which is not
    /// the same as a genuinely empty backend
    Unavailable,
}

/// Outcome of a reload: how many rows became transactions, and which raw
/// rows were rejected at the validation boundary (0-indexed row number
/// plus the validation error)
#[derive(Debug, Default)]
pub struct ReloadReport {
    pub loaded: usize,
    pub rejected: Vec<(usize, FintrackError)>,
}

/// An interactive session over one ledger and one backend
pub struct Session {
    backend: Box<dyn Backend>,
    ledger: Ledger,
    status: LoadStatus,
}

impl Session {
    /// Create a session with an empty ledger; call [`Session::reload`] to
    /// populate it
    pub fn new(backend: Box<dyn Backend>) -> Self {
        Self {
            backend,
            ledger: Ledger::new(),
            status: LoadStatus::NotLoaded,
        }
    }

    /// The canonical ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Current load status
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Rebuild the ledger from the backend.
    ///
    /// Rows that fail validation are reported and skipped; they never
    /// reach the ledger. An unreachable backend yields an empty ledger
    /// with [`LoadStatus::Unavailable`] rather than an error, so the
    /// caller can render "backend offline" instead of "no entries".
    pub fn reload(&mut self) -> FintrackResult<ReloadReport> {
        let raw_records = match self.backend.load_all() {
            Ok(records) => records,
            Err(e) if e.is_backend_unavailable() => {
                self.ledger.replace_all(Vec::new());
                self.status = LoadStatus::Unavailable;
                return Ok(ReloadReport::default());
            }
            Err(e) => return Err(e),
        };

        let mut report = ReloadReport::default();
        let mut transactions = Vec::with_capacity(raw_records.len());

        for (row, raw) in raw_records.iter().enumerate() {
            match normalize(raw) {
                Ok(txn) => transactions.push(txn),
                Err(e) => report.rejected.push((row, e)),
            }
        }

        report.loaded = transactions.len();
        self.ledger.replace_all(transactions);
        self.status = LoadStatus::Loaded;
        Ok(report)
    }

    /// Normalize and persist one raw entry.
    ///
    /// The backend append happens before the ledger append: if the backend
    /// fails, the entry is not saved anywhere and the ledger is untouched.
    pub fn record(&mut self, raw: &RawRecord) -> FintrackResult<Transaction> {
        let txn = normalize(raw)?;
        self.backend.append_row(&transaction_row(&txn))?;
        self.ledger.append(txn.clone());
        Ok(txn)
    }

    /// Transactions inside a filter window (convenience over
    /// [`crate::aggregate::filter`])
    pub fn filtered(&self, window: FilterWindow) -> Vec<Transaction> {
        filter(self.ledger.all(), window)
    }
}
