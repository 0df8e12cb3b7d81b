//! Points Core - receipt scoring engine and score store
//!
//! This crate provides the domain logic for the receipt points service:
//! - Receipt and item types matching the external wire contract
//! - The scoring engine: a pure mapping from a receipt to a point total
//! - The identifier-keyed score store holding computed results
//!
//! The HTTP layer lives in `points-api`; nothing in this crate performs I/O
//! beyond the async store lock.

pub mod error;
pub mod scoring;
pub mod store;
pub mod types;

pub use error::{ScoreError, ScoreResult, StoreError, StoreResult};
pub use scoring::calculate_points;
pub use store::{MemoryScoreStore, ScoreStore};
pub use types::{Item, Receipt, ReceiptId};
