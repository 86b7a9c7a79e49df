//! Invoice repository for database operations.

use larder_core::InvoiceId;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::{Invoice, InvoiceInput};

const INVOICE_COLUMNS: &str = "id, customer_id, total, created_at";

/// Repository for invoice database operations.
pub struct InvoiceRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> InvoiceRepository<'a> {
    /// Create a new invoice repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all invoices, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Invoice>, RepositoryError> {
        let invoices = sqlx::query_as::<_, Invoice>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(invoices)
    }

    /// Get an invoice by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: InvoiceId) -> Result<Option<Invoice>, RepositoryError> {
        let invoice = sqlx::query_as::<_, Invoice>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(invoice)
    }

    /// Insert a new invoice. `created_at` is set by the database and is
    /// immutable afterwards.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including a
    /// foreign-key violation; handlers check the customer first for a clean
    /// client error).
    pub async fn create(&self, input: &InvoiceInput) -> Result<Invoice, RepositoryError> {
        let invoice = sqlx::query_as::<_, Invoice>(&format!(
            "INSERT INTO invoices (customer_id, total)
             VALUES ($1, $2)
             RETURNING {INVOICE_COLUMNS}"
        ))
        .bind(input.customer_id)
        .bind(input.total)
        .fetch_one(self.pool)
        .await?;
        Ok(invoice)
    }

    /// Fully update an invoice, leaving `created_at` untouched. Returns
    /// `None` if the invoice does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: InvoiceId,
        input: &InvoiceInput,
    ) -> Result<Option<Invoice>, RepositoryError> {
        let invoice = sqlx::query_as::<_, Invoice>(&format!(
            "UPDATE invoices
             SET customer_id = $2, total = $3
             WHERE id = $1
             RETURNING {INVOICE_COLUMNS}"
        ))
        .bind(id)
        .bind(input.customer_id)
        .bind(input.total)
        .fetch_optional(self.pool)
        .await?;
        Ok(invoice)
    }

    /// Delete an invoice. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: InvoiceId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
