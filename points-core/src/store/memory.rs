//! In-memory score store

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::ScoreStore;
use crate::error::{StoreError, StoreResult};
use crate::types::ReceiptId;

/// Identifier draws `put` makes before giving up. Random 128-bit
/// identifiers collide so rarely that hitting this cap means the generator
/// is broken, not unlucky.
const MAX_ID_ATTEMPTS: u32 = 16;

type IdGenerator = Box<dyn Fn() -> ReceiptId + Send + Sync>;

/// Thread-safe in-memory score store
///
/// A single `RwLock` guards the map. `put` holds the write lock across the
/// whole draw-check-insert sequence, so concurrent calls can never claim
/// the same identifier; scoring happens before the store is touched, so the
/// critical section is just the map operation.
pub struct MemoryScoreStore {
    scores: RwLock<HashMap<ReceiptId, u64>>,
    id_gen: IdGenerator,
}

impl MemoryScoreStore {
    /// Create an empty store with random identifier allocation
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(ReceiptId::generate))
    }

    /// Create a store with a custom identifier generator
    ///
    /// Lets tests shrink the identifier space to force collisions.
    pub fn with_id_generator(id_gen: IdGenerator) -> Self {
        Self {
            scores: RwLock::new(HashMap::new()),
            id_gen,
        }
    }

    /// Number of recorded scores
    pub async fn len(&self) -> usize {
        self.scores.read().await.len()
    }

    /// Whether the store holds no scores
    pub async fn is_empty(&self) -> bool {
        self.scores.read().await.is_empty()
    }
}

impl Default for MemoryScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScoreStore for MemoryScoreStore {
    async fn put(&self, points: u64) -> StoreResult<ReceiptId> {
        let mut scores = self.scores.write().await;

        for _ in 0..MAX_ID_ATTEMPTS {
            let id = (self.id_gen)();
            if scores.contains_key(&id) {
                continue;
            }
            scores.insert(id.clone(), points);
            return Ok(id);
        }

        Err(StoreError::IdentifierSpaceExhausted(MAX_ID_ATTEMPTS))
    }

    async fn get(&self, id: &ReceiptId) -> StoreResult<Option<u64>> {
        let scores = self.scores.read().await;
        Ok(scores.get(id).copied())
    }
}
