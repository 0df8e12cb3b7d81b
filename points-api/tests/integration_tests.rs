//! Integration tests for the receipt points API endpoints
//!
//! These tests drive the router end-to-end: submit receipts, follow the
//! returned identifiers, and check the error contract.

use axum_test::TestServer;
use points_api::{create_router, AppState};
use points_core::MemoryScoreStore;
use serde_json::json;
use std::sync::Arc;

/// Create test server over a fresh in-memory store
fn create_test_server() -> TestServer {
    let state = AppState::new(Arc::new(MemoryScoreStore::new()));
    let router = create_router(state);
    TestServer::new(router).unwrap()
}

fn target_receipt() -> serde_json::Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}

fn corner_market_receipt() -> serde_json::Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}

/// Submit a receipt and return the identifier from the response
async fn process(server: &TestServer, body: &serde_json::Value) -> String {
    let response = server.post("/receipts/process").json(body).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    body["id"].as_str().expect("id field").to_string()
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

// ============ Process Endpoint Tests ============

#[tokio::test]
async fn test_process_and_lookup_target_receipt() {
    let server = create_test_server();

    let id = process(&server, &target_receipt()).await;

    let response = server.get(&format!("/receipts/{}/points", id)).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["points"], 28);
}

#[tokio::test]
async fn test_process_and_lookup_corner_market_receipt() {
    let server = create_test_server();

    let id = process(&server, &corner_market_receipt()).await;

    let response = server.get(&format!("/receipts/{}/points", id)).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["points"], 109);
}

#[tokio::test]
async fn test_identical_submissions_get_distinct_identifiers() {
    let server = create_test_server();

    let first = process(&server, &target_receipt()).await;
    let second = process(&server, &target_receipt()).await;
    assert_ne!(first, second);

    for id in [first, second] {
        let response = server.get(&format!("/receipts/{}/points", id)).await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["points"], 28);
    }
}

#[tokio::test]
async fn test_undecodable_body_is_rejected() {
    let server = create_test_server();

    let response = server
        .post("/receipts/process")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "the receipt is invalid");
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let server = create_test_server();

    let response = server
        .post("/receipts/process")
        .json(&json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "items": [],
            "total": "1.00"
        }))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "the receipt is invalid");
}

#[tokio::test]
async fn test_unscoreable_receipts_are_rejected() {
    let server = create_test_server();

    let mut bad_total = target_receipt();
    bad_total["total"] = json!("nine dollars");

    let mut bad_price = target_receipt();
    bad_price["items"][1]["price"] = json!("cheap");

    let mut bad_date = target_receipt();
    bad_date["purchaseDate"] = json!("January 1st");

    let mut bad_time = target_receipt();
    bad_time["purchaseTime"] = json!("noon");

    for body in [bad_total, bad_price, bad_date, bad_time] {
        let response = server.post("/receipts/process").json(&body).await;
        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "the receipt is invalid");
    }
}

// ============ Points Endpoint Tests ============

#[tokio::test]
async fn test_unknown_identifier_is_rejected() {
    let server = create_test_server();

    let response = server
        .get("/receipts/no-such-receipt/points")
        .await;

    // Contract reports lookup misses as 400, not 404.
    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "receipt not found");
}

#[tokio::test]
async fn test_rejected_receipt_leaves_no_record() {
    let store = Arc::new(MemoryScoreStore::new());
    let state = AppState::new(store.clone());
    let server = TestServer::new(create_router(state)).unwrap();

    let mut bad_total = target_receipt();
    bad_total["total"] = json!("nine dollars");
    let response = server.post("/receipts/process").json(&bad_total).await;
    response.assert_status_bad_request();

    assert!(store.is_empty().await);
}
