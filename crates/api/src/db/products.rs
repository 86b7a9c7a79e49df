//! Product repository for database operations.

use larder_core::{NutritionRecord, ProductId};
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::{CreateProduct, Product, UpdateProduct};

const PRODUCT_COLUMNS: &str = "id, name, price, brand, picture, category, nutritional_info, quantity";

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all products, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(products)
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(product)
    }

    /// Insert a new product. `nutritional_info` always starts out NULL;
    /// enrichment is a separate write.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &CreateProduct) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, price, brand, picture, category, quantity)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&input.name)
        .bind(input.price)
        .bind(&input.brand)
        .bind(&input.picture)
        .bind(&input.category)
        .bind(input.quantity)
        .fetch_one(self.pool)
        .await?;
        Ok(product)
    }

    /// Fully update a product. Returns `None` if the product does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: ProductId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products
             SET name = $2, price = $3, brand = $4, picture = $5, category = $6, quantity = $7
             WHERE id = $1
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .bind(&input.name)
        .bind(input.price)
        .bind(&input.brand)
        .bind(&input.picture)
        .bind(&input.category)
        .bind(input.quantity)
        .fetch_optional(self.pool)
        .await?;
        Ok(product)
    }

    /// Delete a product. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Persist a normalized nutrition record onto a product.
    ///
    /// This is the only write path for `nutritional_info`, which keeps the
    /// stored shape identical to [`NutritionRecord`]. Concurrent enrichment
    /// of the same product is last-writer-wins.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn set_nutritional_info(
        &self,
        id: ProductId,
        record: &NutritionRecord,
    ) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE products SET nutritional_info = $2 WHERE id = $1")
            .bind(id)
            .bind(record.to_value())
            .execute(self.pool)
            .await?;
        Ok(())
    }

    /// List products still needing enrichment: `nutritional_info` is NULL or
    /// an empty object (the two are equivalent by rule), oldest first,
    /// optionally capped.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_needing_enrichment(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products
             WHERE nutritional_info IS NULL OR nutritional_info = '{{}}'::jsonb
             ORDER BY id
             LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;
        Ok(products)
    }
}
