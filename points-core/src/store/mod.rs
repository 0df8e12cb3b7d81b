//! Identifier-keyed storage for computed scores
//!
//! Scores are write-once: a successful `put` is the only mutation, and no
//! update or delete operation exists. Records live for the process lifetime.

pub mod memory;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::ReceiptId;

pub use memory::MemoryScoreStore;

/// Score storage interface
///
/// Implementations must be safe under concurrent invocation: two `put`
/// calls may never claim the same identifier, and `get` observes either a
/// fully recorded score or nothing.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Record a score under a freshly allocated identifier
    async fn put(&self, points: u64) -> StoreResult<ReceiptId>;

    /// Look up the score recorded for an identifier
    async fn get(&self, id: &ReceiptId) -> StoreResult<Option<u64>>;
}
