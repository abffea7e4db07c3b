//! Backend collaborator contract
//!
//! A backend is whatever holds the raw ledger rows between sessions: a CSV
//! file, a spreadsheet, or plain memory. The core never depends on which one
//! is in use; it only needs `load_all` and `append_row`. Backends traffic in
//! raw records and ordered string rows — canonicalization is the
//! Normalizer's job.

pub mod csv_file;
pub mod memory;

pub use csv_file::CsvFileBackend;
pub use memory::MemoryBackend;

use crate::error::FintrackResult;
use crate::normalize::RawRecord;

/// Number of columns in a backend row (matches [`crate::normalize::FIELDS`])
pub const ROW_WIDTH: usize = 6;

/// Storage collaborator for raw ledger rows
pub trait Backend {
    /// Load every raw record from the store.
    ///
    /// Fails with [`crate::error::FintrackError::BackendUnavailable`] when
    /// the store cannot be reached; the session turns that into an empty
    /// ledger with an explicit status flag.
    fn load_all(&self) -> FintrackResult<Vec<RawRecord>>;

    /// Append one row of scalar values in backend column order.
    ///
    /// A failure here is hard: the entry must not be considered saved.
    fn append_row(&mut self, row: &[String; ROW_WIDTH]) -> FintrackResult<()>;
}
