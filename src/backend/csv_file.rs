//! CSV file backend
//!
//! Persists the ledger as a delimited text file in the export column order
//! (`date, description, category, kind, amount, payment_method`) with a
//! header row. A missing file is a reachable-but-empty store; a file that
//! cannot be opened is an unavailable one.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};

use super::{Backend, ROW_WIDTH};
use crate::error::{FintrackError, FintrackResult};
use crate::normalize::{RawRecord, FIELDS};

/// Backend storing raw rows in a CSV file
#[derive(Debug, Clone)]
pub struct CsvFileBackend {
    path: PathBuf,
}

impl CsvFileBackend {
    /// Create a backend for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn needs_header(&self) -> bool {
        match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        }
    }
}

impl Backend for CsvFileBackend {
    fn load_all(&self) -> FintrackResult<Vec<RawRecord>> {
        if !self.path.exists() {
            // Not created yet: an empty store, not an unreachable one.
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|e| {
            FintrackError::BackendUnavailable(format!(
                "cannot open {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
        let mut records = Vec::new();

        for result in reader.records() {
            let record = result.map_err(|e| {
                FintrackError::Storage(format!("malformed row in {}: {}", self.path.display(), e))
            })?;

            let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
            records.push(RawRecord::from_row(&row));
        }

        Ok(records)
    }

    fn append_row(&mut self, row: &[String; ROW_WIDTH]) -> FintrackResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                FintrackError::BackendUnavailable(format!(
                    "cannot create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let write_header = self.needs_header();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                FintrackError::BackendUnavailable(format!(
                    "cannot open {}: {}",
                    self.path.display(),
                    e
                ))
            })?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        if write_header {
            writer
                .write_record(FIELDS)
                .map_err(|e| FintrackError::Storage(format!("write failed: {}", e)))?;
        }
        writer
            .write_record(row.iter())
            .map_err(|e| FintrackError::Storage(format!("write failed: {}", e)))?;
        writer
            .flush()
            .map_err(|e| FintrackError::Storage(format!("flush failed: {}", e)))?;

        Ok(())
    }
}
