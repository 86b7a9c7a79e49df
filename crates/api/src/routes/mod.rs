//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check (public)
//! GET  /health/ready               - Readiness check, verifies DB (public)
//!
//! # Products (bearer token required)
//! GET    /api/products             - List products
//! POST   /api/products             - Create product (optional openfood_query hint)
//! GET    /api/products/{id}        - Retrieve product
//! PUT    /api/products/{id}        - Full update
//! DELETE /api/products/{id}        - Delete product
//! POST   /api/products/{id}/enrich - On-demand nutrition enrichment
//!
//! # Customers (bearer token required)
//! GET    /api/customers            - List customers
//! POST   /api/customers            - Create customer
//! GET    /api/customers/{id}       - Retrieve customer
//! PUT    /api/customers/{id}       - Full update
//! DELETE /api/customers/{id}       - Delete customer (cascades to invoices)
//!
//! # Invoices (bearer token required)
//! GET    /api/invoices             - List invoices
//! POST   /api/invoices             - Create invoice
//! GET    /api/invoices/{id}        - Retrieve invoice
//! PUT    /api/invoices/{id}        - Full update (created_at untouched)
//! DELETE /api/invoices/{id}        - Delete invoice
//! ```

pub mod customers;
pub mod invoices;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::remove),
        )
        .route("/{id}/enrich", post(products::enrich))
}

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(customers::list).post(customers::create))
        .route(
            "/{id}",
            get(customers::show)
                .put(customers::update)
                .delete(customers::remove),
        )
}

/// Create the invoice routes router.
pub fn invoice_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(invoices::list).post(invoices::create))
        .route(
            "/{id}",
            get(invoices::show)
                .put(invoices::update)
                .delete(invoices::remove),
        )
}

/// Create the combined API router (everything under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .nest("/api/customers", customer_routes())
        .nest("/api/invoices", invoice_routes())
}
