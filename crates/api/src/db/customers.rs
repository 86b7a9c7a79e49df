//! Customer repository for database operations.

use larder_core::CustomerId;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::{Customer, CustomerInput};

const CUSTOMER_COLUMNS: &str = "id, first_name, last_name, phone, address, city, zip_code, country";

/// Map a unique-violation on the phone index to a `Conflict`.
fn map_insert_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict("phone already in use".to_owned());
    }
    RepositoryError::Database(e)
}

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all customers, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        let customers = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(customers)
    }

    /// Get a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(customer)
    }

    /// Insert a new customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the phone is already in use.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, input: &CustomerInput) -> Result<Customer, RepositoryError> {
        sqlx::query_as::<_, Customer>(&format!(
            "INSERT INTO customers (first_name, last_name, phone, address, city, zip_code, country)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {CUSTOMER_COLUMNS}"
        ))
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.phone)
        .bind(&input.address)
        .bind(&input.city)
        .bind(&input.zip_code)
        .bind(&input.country)
        .fetch_one(self.pool)
        .await
        .map_err(map_insert_error)
    }

    /// Fully update a customer. Returns `None` if the customer does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the new phone is already in use.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: CustomerId,
        input: &CustomerInput,
    ) -> Result<Option<Customer>, RepositoryError> {
        sqlx::query_as::<_, Customer>(&format!(
            "UPDATE customers
             SET first_name = $2, last_name = $3, phone = $4, address = $5,
                 city = $6, zip_code = $7, country = $8
             WHERE id = $1
             RETURNING {CUSTOMER_COLUMNS}"
        ))
        .bind(id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.phone)
        .bind(&input.address)
        .bind(&input.city)
        .bind(&input.zip_code)
        .bind(&input.country)
        .fetch_optional(self.pool)
        .await
        .map_err(map_insert_error)
    }

    /// Delete a customer (and, through the schema, all their invoices).
    /// Returns `false` if the customer did not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: CustomerId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
