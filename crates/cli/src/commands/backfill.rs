//! Nutrition backfill command.
//!
//! Walks the products that still need enrichment (`nutritional_info` null or
//! empty) and queries the nutrition provider for each one, sleeping between
//! requests to stay polite toward the public API. One failed product never
//! aborts the run; the final report counts every outcome.

use std::time::Duration;

use larder_api::config::{ApiConfig, ConfigError};
use larder_api::db::{self, RepositoryError};
use larder_api::services::enrichment::{BackfillOptions, run_backfill};
use larder_api::services::openfoodfacts::{OpenFoodFactsClient, ProviderError};

#[derive(Debug, thiserror::Error)]
pub enum BackfillError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Provider client error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Backfill error: {0}")]
    Backfill(#[from] RepositoryError),

    #[error("Invalid delay: {0} (must be a non-negative number of seconds)")]
    InvalidDelay(f64),
}

/// Run the nutrition backfill.
///
/// `limit` of 0 means no limit. `delay` is the sleep in seconds after each
/// provider request (skipped products cause no sleep).
///
/// # Errors
///
/// Returns an error if configuration or the product selection query fails.
/// Per-product lookup and persistence failures are counted in the report
/// instead.
pub async fn run(limit: u32, delay: f64) -> Result<(), BackfillError> {
    if !delay.is_finite() || delay < 0.0 {
        return Err(BackfillError::InvalidDelay(delay));
    }

    let config = ApiConfig::from_env()?;
    let pool = db::create_pool(&config.database_url).await?;
    let client = OpenFoodFactsClient::new(&config.provider)?;

    let options = BackfillOptions {
        limit: if limit == 0 { None } else { Some(limit as usize) },
        delay: Duration::from_secs_f64(delay),
    };

    tracing::info!(limit = ?options.limit, delay_secs = delay, "Starting nutrition backfill");

    let report = run_backfill(&pool, &client, options).await?;
    tracing::info!("Backfill finished: {report}");
    Ok(())
}
