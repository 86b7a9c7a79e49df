//! Database operations for the Larder `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `products` - Inventory items, including the optional normalized
//!   `nutritional_info` record
//! - `customers` - Invoice recipients
//! - `invoices` - One row per invoice, cascade-deleted with its customer
//!
//! All queries are runtime-bound (`sqlx::query_as` + `FromRow`) so the crate
//! builds without a reachable database.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p larder-cli -- migrate
//! ```

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub mod customers;
pub mod invoices;
pub mod products;

pub use customers::CustomerRepository;
pub use invoices::InvoiceRepository;
pub use products::ProductRepository;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Underlying database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Unique-constraint violation (e.g., duplicate customer phone).
    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
