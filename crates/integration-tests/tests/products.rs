//! Integration tests for the product endpoints.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p larder-api)
//! - `LARDER_TEST_TOKEN` set to a valid bearer token
//!
//! Run with: cargo test -p larder-integration-tests -- --ignored

use larder_integration_tests::{authenticated, base_url, client};
use reqwest::StatusCode;
use serde_json::{Value, json};

/// Test helper: create a product and return its JSON representation.
async fn create_test_product(body: Value) -> Value {
    let resp = authenticated(client().post(format!("{}/api/products", base_url())))
        .json(&body)
        .send()
        .await
        .expect("Failed to create test product");
    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to parse product")
}

/// Test helper: delete a product, ignoring failures.
async fn delete_test_product(id: i64) {
    let _ = authenticated(client().delete(format!("{}/api/products/{id}", base_url())))
        .send()
        .await;
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_list_without_token_is_unauthorized() {
    let resp = client()
        .get(format!("{}/api/products", base_url()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert!(body["detail"].is_string());
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_product_crud_lifecycle() {
    let product = create_test_product(json!({
        "name": "Integration Test Soup",
        "price": "4.20",
        "quantity": 7
    }))
    .await;

    let id = product["id"].as_i64().expect("product id");
    assert_eq!(product["price"], json!("4.20"));
    assert_eq!(product["nutritional_info"], Value::Null);

    // Retrieve
    let resp = authenticated(client().get(format!("{}/api/products/{id}", base_url())))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::OK);

    // Full update
    let resp = authenticated(client().put(format!("{}/api/products/{id}", base_url())))
        .json(&json!({
            "name": "Integration Test Soup",
            "price": "4.50",
            "quantity": 6
        }))
        .send()
        .await
        .expect("Failed to update product");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.expect("Failed to parse product");
    assert_eq!(updated["price"], json!("4.50"));
    assert_eq!(updated["quantity"], json!(6));

    // Delete
    let resp = authenticated(client().delete(format!("{}/api/products/{id}", base_url())))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Gone
    let resp = authenticated(client().get(format!("{}/api/products/{id}", base_url())))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_create_with_negative_quantity_is_rejected() {
    let resp = authenticated(client().post(format!("{}/api/products", base_url())))
        .json(&json!({
            "name": "Bad Quantity",
            "price": "1.00",
            "quantity": -1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running API server, database, and provider access"]
async fn test_enrich_without_query_is_rejected() {
    let product = create_test_product(json!({
        "name": "Needs Query",
        "price": "2.00",
        "quantity": 1
    }))
    .await;
    let id = product["id"].as_i64().expect("product id");

    let resp = authenticated(client().post(format!("{}/api/products/{id}/enrich", base_url())))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["detail"], json!("query is required"));

    delete_test_product(id).await;
}

#[tokio::test]
#[ignore = "Requires running API server, database, and provider access"]
async fn test_enrich_with_unmatchable_query_leaves_product_unchanged() {
    let product = create_test_product(json!({
        "name": "No Match Expected",
        "price": "2.00",
        "quantity": 1
    }))
    .await;
    let id = product["id"].as_i64().expect("product id");

    let resp = authenticated(client().post(format!("{}/api/products/{id}/enrich", base_url())))
        .json(&json!({"query": "zzzzzz-no-such-product-zzzzzz"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = authenticated(client().get(format!("{}/api/products/{id}", base_url())))
        .send()
        .await
        .expect("Failed to get product");
    let body: Value = resp.json().await.expect("Failed to parse product");
    assert_eq!(body["nutritional_info"], Value::Null);

    delete_test_product(id).await;
}
