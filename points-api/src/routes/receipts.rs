//! Receipt scoring endpoints

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    Json,
};
use tracing::debug;

use points_core::{calculate_points, Receipt, ReceiptId};

use crate::dto::{PointsResponse, ProcessReceiptRequest, ProcessReceiptResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Score a submitted receipt and return its identifier
///
/// The body decode result is taken as a `Result` so an undecodable body
/// produces the same uniform rejection as an unscoreable receipt.
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<ProcessReceiptRequest>, JsonRejection>,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    let Json(req) = payload.map_err(|e| {
        debug!(error = %e, "rejecting undecodable receipt body");
        ApiError::InvalidReceipt
    })?;

    // Score before touching the store; a rejected receipt leaves no record.
    let receipt = Receipt::from(req);
    let points = calculate_points(&receipt).map_err(|e| {
        debug!(error = %e, retailer = %receipt.retailer, "rejecting unscoreable receipt");
        ApiError::InvalidReceipt
    })?;

    let id = state.store.put(points).await?;
    debug!(receipt_id = %id, points, "receipt scored");

    Ok(Json(ProcessReceiptResponse { id: id.to_string() }))
}

/// Points awarded to a previously processed receipt
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state
        .store
        .get(&ReceiptId::from(id))
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(PointsResponse { points }))
}
