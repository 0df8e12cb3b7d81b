//! Data Transfer Objects for API requests and responses

use points_core::{Item, Receipt};
use serde::{Deserialize, Serialize};

/// Receipt submitted for scoring
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReceiptRequest {
    /// Retailer or store name
    pub retailer: String,
    /// Purchase date, `YYYY-MM-DD`
    pub purchase_date: String,
    /// Purchase time, 24-hour `HH:MM`
    pub purchase_time: String,
    /// Purchased items
    pub items: Vec<ItemDto>,
    /// Receipt total, decimal text
    pub total: String,
}

/// A single line item on a submitted receipt
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub short_description: String,
    pub price: String,
}

/// Identifier assigned to a processed receipt
#[derive(Debug, Serialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Points awarded to a processed receipt
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Service liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl From<ProcessReceiptRequest> for Receipt {
    fn from(req: ProcessReceiptRequest) -> Self {
        Receipt {
            retailer: req.retailer,
            purchase_date: req.purchase_date,
            purchase_time: req.purchase_time,
            items: req.items.into_iter().map(Item::from).collect(),
            total: req.total,
        }
    }
}

impl From<ItemDto> for Item {
    fn from(dto: ItemDto) -> Self {
        Item {
            short_description: dto.short_description,
            price: dto.price,
        }
    }
}
