//! Seed the database with sample data for local development.
//!
//! Inserts a handful of pantry products, two customers, and an invoice per
//! customer. Running it twice inserts the rows twice for products but fails
//! on the second customer insert because the phone numbers collide; wipe the
//! tables (or use fresh phone numbers) before re-seeding.

use larder_api::config::{ApiConfig, ConfigError};
use larder_api::db::{self, CustomerRepository, InvoiceRepository, ProductRepository, RepositoryError};
use larder_api::models::{CreateProduct, CustomerInput, InvoiceInput};
use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Seed the database with sample data.
///
/// # Errors
///
/// Returns an error if configuration loading or any insert fails.
pub async fn run() -> Result<(), SeedError> {
    let config = ApiConfig::from_env()?;
    let pool = db::create_pool(&config.database_url).await?;

    let products = ProductRepository::new(&pool);
    for input in sample_products() {
        let product = products.create(&input).await?;
        tracing::info!(id = %product.id, name = %product.name, "Seeded product");
    }

    let customers = CustomerRepository::new(&pool);
    let invoices = InvoiceRepository::new(&pool);
    for (input, total) in sample_customers() {
        let customer = customers.create(&input).await?;
        tracing::info!(id = %customer.id, last_name = %customer.last_name, "Seeded customer");

        let invoice = invoices
            .create(&InvoiceInput {
                customer_id: customer.id,
                total,
            })
            .await?;
        tracing::info!(id = %invoice.id, customer_id = %invoice.customer_id, "Seeded invoice");
    }

    tracing::info!("Seeding complete");
    Ok(())
}

fn sample_products() -> Vec<CreateProduct> {
    vec![
        CreateProduct {
            name: "Hazelnut Spread".to_string(),
            price: Decimal::new(549, 2),
            brand: "Nutella".to_string(),
            picture: String::new(),
            category: "spreads".to_string(),
            quantity: 12,
            openfood_query: None,
        },
        CreateProduct {
            name: "Rolled Oats".to_string(),
            price: Decimal::new(299, 2),
            brand: "Quaker".to_string(),
            picture: String::new(),
            category: "cereals".to_string(),
            quantity: 30,
            openfood_query: None,
        },
        CreateProduct {
            name: "Sparkling Water".to_string(),
            price: Decimal::new(120, 2),
            brand: String::new(),
            picture: String::new(),
            category: "beverages".to_string(),
            quantity: 48,
            openfood_query: None,
        },
    ]
}

fn sample_customers() -> Vec<(CustomerInput, Decimal)> {
    vec![
        (
            CustomerInput {
                first_name: "Ada".to_string(),
                last_name: "Martin".to_string(),
                phone: "+33600000001".to_string(),
                address: "12 Rue des Halles".to_string(),
                city: "Lyon".to_string(),
                zip_code: "69002".to_string(),
                country: "France".to_string(),
            },
            Decimal::new(8470, 2),
        ),
        (
            CustomerInput {
                first_name: "Noor".to_string(),
                last_name: "Haddad".to_string(),
                phone: "+33600000002".to_string(),
                address: "3 Avenue Jean Jaures".to_string(),
                city: "Nantes".to_string(),
                zip_code: "44000".to_string(),
                country: "France".to_string(),
            },
            Decimal::new(2335, 2),
        ),
    ]
}
