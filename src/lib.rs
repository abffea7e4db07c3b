//! fintrack - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the fintrack
//! application: an append-only transaction ledger fed through a validating
//! normalizer, and an aggregation engine that derives KPIs, category
//! breakdowns and running balance series for a filtered dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Canonical data model (transactions, money, closed enums)
//! - `normalize`: Raw record validation and coercion
//! - `ledger`: In-memory append-only ledger store
//! - `aggregate`: Filtered KPIs, group-bys and cumulative series
//! - `backend`: Pluggable raw-row storage (memory, CSV file)
//! - `session`: Owned session context tying backend and ledger together
//! - `display`: Presentation formatting
//! - `export`: CSV export
//! - `cli`: Command handlers
//!
//! Data flows one way: raw entries → `normalize` → `ledger` → `aggregate`
//! → `display`. Aggregation is pure and total over canonical data; only
//! the normalization boundary can fail.

pub mod aggregate;
pub mod backend;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod normalize;
pub mod session;

pub use error::{FintrackError, FintrackResult};
