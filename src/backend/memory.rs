//! In-memory backend
//!
//! Holds raw rows in a Vec. Used for scratch sessions and as the test
//! double for the backend contract, including simulated unavailability.

use super::{Backend, ROW_WIDTH};
use crate::error::{FintrackError, FintrackResult};
use crate::normalize::RawRecord;

/// A backend that keeps raw rows in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    rows: Vec<[String; ROW_WIDTH]>,
    available: bool,
}

impl MemoryBackend {
    /// Create an empty, reachable backend
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            available: true,
        }
    }

    /// Create a backend pre-seeded with rows
    pub fn with_rows(rows: Vec<[String; ROW_WIDTH]>) -> Self {
        Self {
            rows,
            available: true,
        }
    }

    /// Simulate connectivity loss: every operation fails until restored
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Number of stored rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the backend holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn check_available(&self) -> FintrackResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(FintrackError::BackendUnavailable(
                "memory backend marked unavailable".into(),
            ))
        }
    }
}

impl Backend for MemoryBackend {
    fn load_all(&self) -> FintrackResult<Vec<RawRecord>> {
        self.check_available()?;
        Ok(self.rows.iter().map(|row| RawRecord::from_row(row)).collect())
    }

    fn append_row(&mut self, row: &[String; ROW_WIDTH]) -> FintrackResult<()> {
        self.check_available()?;
        self.rows.push(row.clone());
        Ok(())
    }
}
