//! API route handlers

pub mod health;
pub mod receipts;

use axum::{routing::get, routing::post, Router};

use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(health::health_check))
        // Receipt endpoints
        .route("/receipts/process", post(receipts::process_receipt))
        .route("/receipts/:id/points", get(receipts::get_points))
        // State
        .with_state(state)
}
