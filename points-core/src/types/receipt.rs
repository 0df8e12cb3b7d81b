//! Receipt types
//!
//! Monetary amounts, dates, and times stay text-typed here, matching the
//! wire contract. The scoring engine parses them at its own boundary; raw
//! text never reaches scoring arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier returned to callers after a receipt is scored
///
/// Canonical form is the hyphenated text of a 128-bit random value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ReceiptId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A purchase receipt submitted for scoring
///
/// Immutable once received. Item order is preserved, although no scoring
/// rule currently depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name
    pub retailer: String,
    /// Purchase date, `YYYY-MM-DD`
    pub purchase_date: String,
    /// Purchase time, 24-hour `HH:MM`
    pub purchase_time: String,
    /// Purchased items
    pub items: Vec<Item>,
    /// Receipt total, decimal text
    pub total: String,
}

/// A single line item on a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Product description
    pub short_description: String,
    /// Item price, decimal text
    pub price: String,
}
