//! Core data models for fintrack
//!
//! The canonical transaction schema: every record that reaches the
//! aggregation layer is built from these closed types.

pub mod category;
pub mod money;
pub mod transaction;

pub use category::Category;
pub use money::Money;
pub use transaction::{Kind, PaymentMethod, Transaction};
