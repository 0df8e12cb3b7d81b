//! API Error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use points_core::StoreError;

/// API error types
///
/// The process endpoint reports one uniform message whether the body could
/// not be decoded or a scoring rule rejected the receipt; the specific
/// cause is logged before it is collapsed into this type.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("the receipt is invalid")]
    InvalidReceipt,

    #[error("receipt not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(#[from] StoreError),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidReceipt => StatusCode::BAD_REQUEST,
            // The published contract reports lookup misses as 400.
            ApiError::NotFound => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;
