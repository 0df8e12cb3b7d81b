//! Error types for scoring and storage

use thiserror::Error;

/// Scoring failures
///
/// Each variant records which rule rejected the receipt and carries the
/// offending field text. The API layer collapses these into a uniform
/// response; the distinction exists for logging and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("total is not a decimal amount: {0:?}")]
    InvalidTotal(String),

    #[error("item price is not a decimal amount: {0:?}")]
    InvalidPrice(String),

    #[error("purchase date is malformed: {0:?}")]
    InvalidDate(String),

    #[error("purchase time is malformed: {0:?}")]
    InvalidTime(String),
}

/// Store failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no free identifier after {0} attempts")]
    IdentifierSpaceExhausted(u32),
}

/// Result type alias for scoring operations
pub type ScoreResult<T> = Result<T, ScoreError>;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
