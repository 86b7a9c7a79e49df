//! Integration tests for the customer and invoice endpoints.
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

/// Unique phone number per test run; the schema enforces phone uniqueness.
fn unique_phone(tag: u8) -> String {
    format!("+3361{}{:02}", chrono::Utc::now().timestamp_millis() % 100_000_000, tag)
}

async fn create_test_customer(phone: &str) -> Value {
    let resp = authenticated(client().post(format!("{}/api/customers", base_url())))
        .json(&json!({
            "first_name": "Test",
            "last_name": "Customer",
            "phone": phone,
            "city": "Testville"
        }))
        .send()
        .await
        .expect("Failed to create test customer");
    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to parse customer")
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_duplicate_phone_conflicts() {
    let phone = unique_phone(1);
    let customer = create_test_customer(&phone).await;
    let id = customer["id"].as_i64().expect("customer id");

    let resp = authenticated(client().post(format!("{}/api/customers", base_url())))
        .json(&json!({
            "first_name": "Other",
            "last_name": "Customer",
            "phone": phone
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let _ = authenticated(client().delete(format!("{}/api/customers/{id}", base_url())))
        .send()
        .await;
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_deleting_customer_cascades_to_invoices() {
    let customer = create_test_customer(&unique_phone(2)).await;
    let customer_id = customer["id"].as_i64().expect("customer id");

    let mut invoice_ids = Vec::new();
    for total in ["10.00", "25.50"] {
        let resp = authenticated(client().post(format!("{}/api/invoices", base_url())))
            .json(&json!({"customer_id": customer_id, "total": total}))
            .send()
            .await
            .expect("Failed to create invoice");
        assert_eq!(resp.status(), StatusCode::CREATED);
        let invoice: Value = resp.json().await.expect("Failed to parse invoice");
        invoice_ids.push(invoice["id"].as_i64().expect("invoice id"));
    }

    let resp = authenticated(client().delete(format!(
        "{}/api/customers/{customer_id}",
        base_url()
    )))
    .send()
    .await
    .expect("Failed to delete customer");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    for invoice_id in invoice_ids {
        let resp = authenticated(client().get(format!("{}/api/invoices/{invoice_id}", base_url())))
            .send()
            .await
            .expect("Failed to get invoice");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_invoice_requires_existing_customer() {
    let resp = authenticated(client().post(format!("{}/api/invoices", base_url())))
        .json(&json!({"customer_id": 999_999_999, "total": "5.00"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_invoice_created_at_survives_update() {
    let customer = create_test_customer(&unique_phone(3)).await;
    let customer_id = customer["id"].as_i64().expect("customer id");

    let resp = authenticated(client().post(format!("{}/api/invoices", base_url())))
        .json(&json!({"customer_id": customer_id, "total": "10.00"}))
        .send()
        .await
        .expect("Failed to create invoice");
    let invoice: Value = resp.json().await.expect("Failed to parse invoice");
    let invoice_id = invoice["id"].as_i64().expect("invoice id");
    let created_at = invoice["created_at"].clone();

    let resp = authenticated(client().put(format!("{}/api/invoices/{invoice_id}", base_url())))
        .json(&json!({"customer_id": customer_id, "total": "12.00"}))
        .send()
        .await
        .expect("Failed to update invoice");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.expect("Failed to parse invoice");
    assert_eq!(updated["total"], json!("12.00"));
    assert_eq!(updated["created_at"], created_at);

    let _ = authenticated(client().delete(format!("{}/api/customers/{customer_id}", base_url())))
        .send()
        .await;
}
