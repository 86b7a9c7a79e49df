//! Batch nutrition backfill.
//!
//! Walks every product still lacking `nutritional_info`, applies the
//! enrichment policy, and performs paced provider lookups. A single item's
//! failure - provider or persistence - is logged and counted, never allowed
//! to abort the batch; each success is committed independently, so stopping
//! the job mid-run just leaves partial progress behind.

use std::time::Duration;

use larder_core::{NutritionRecord, ProductId, enrichment::EnrichmentPlan};
use sqlx::PgPool;
use tracing::{info, warn};

use crate::db::{ProductRepository, RepositoryError};
use crate::models::Product;
use crate::services::openfoodfacts::{Lookup, OpenFoodFactsClient, ProviderError};

/// Provider lookup seam, implemented by [`OpenFoodFactsClient`] and by test
/// doubles.
pub trait NutritionLookup: Sync {
    /// Look up the first candidate for `query`.
    fn lookup(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Lookup, ProviderError>> + Send;
}

impl NutritionLookup for OpenFoodFactsClient {
    fn lookup(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Lookup, ProviderError>> + Send {
        self.search_first(query)
    }
}

/// Product-store seam for the backfill: selection and the single write path.
pub trait BackfillStore: Sync {
    /// Products whose `nutritional_info` is NULL or an empty object,
    /// optionally capped.
    fn products_needing_enrichment(
        &self,
        limit: Option<i64>,
    ) -> impl Future<Output = Result<Vec<Product>, RepositoryError>> + Send;

    /// Persist a normalized record onto one product.
    fn store_nutrition(
        &self,
        id: ProductId,
        record: &NutritionRecord,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

impl BackfillStore for PgPool {
    async fn products_needing_enrichment(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<Product>, RepositoryError> {
        ProductRepository::new(self).list_needing_enrichment(limit).await
    }

    async fn store_nutrition(
        &self,
        id: ProductId,
        record: &NutritionRecord,
    ) -> Result<(), RepositoryError> {
        ProductRepository::new(self).set_nutritional_info(id, record).await
    }
}

/// Options for one backfill run.
#[derive(Debug, Clone, Copy)]
pub struct BackfillOptions {
    /// Maximum number of products to process (`None` = unlimited).
    pub limit: Option<usize>,
    /// Pause between provider round trips, to respect the provider's rate
    /// limits. Applied after every network attempt, not after policy skips.
    pub delay: Duration,
}

impl Default for BackfillOptions {
    fn default() -> Self {
        Self {
            limit: None,
            delay: Duration::from_secs(1),
        }
    }
}

/// Per-run outcome counts. `processed` covers every selected item, whatever
/// its outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackfillReport {
    pub processed: usize,
    pub backfilled: usize,
    pub no_result: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl std::fmt::Display for BackfillReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "processed {} products: {} backfilled, {} no result, {} skipped, {} failed",
            self.processed, self.backfilled, self.no_result, self.skipped, self.failed
        )
    }
}

/// Run the backfill over every product needing enrichment.
///
/// # Errors
///
/// Returns `RepositoryError` only if the initial selection query fails;
/// per-item errors are counted in the report instead.
pub async fn run_backfill<S, L>(
    store: &S,
    lookup: &L,
    options: BackfillOptions,
) -> Result<BackfillReport, RepositoryError>
where
    S: BackfillStore,
    L: NutritionLookup,
{
    let limit = options.limit.and_then(|n| i64::try_from(n).ok());
    let targets = store.products_needing_enrichment(limit).await?;
    let total = targets.len();
    info!(total, "found products to backfill");

    let mut report = BackfillReport::default();
    for product in targets {
        report.processed += 1;

        let plan = larder_core::enrichment::plan(
            &product.name,
            &product.brand,
            product.nutritional_info.as_ref(),
        );
        let query = match plan {
            EnrichmentPlan::Lookup(query) => query,
            EnrichmentPlan::Skip | EnrichmentPlan::NoUsableQuery => {
                info!(product_id = %product.id, "skipping product without a usable query");
                report.skipped += 1;
                // No network attempt was made, so no pacing delay either.
                continue;
            }
        };

        match lookup.lookup(&query).await {
            Ok(Lookup::Found(record)) => match store.store_nutrition(product.id, &record).await {
                Ok(()) => {
                    info!(product_id = %product.id, %query, "backfilled product");
                    report.backfilled += 1;
                }
                Err(error) => {
                    warn!(product_id = %product.id, %query, %error, "failed to persist nutrition record");
                    report.failed += 1;
                }
            },
            Ok(Lookup::NoMatch) => {
                info!(product_id = %product.id, %query, "no provider result");
                report.no_result += 1;
            }
            Err(error) => {
                warn!(product_id = %product.id, %query, %error, "provider lookup failed");
                report.failed += 1;
            }
        }

        if !options.delay.is_zero() {
            tokio::time::sleep(options.delay).await;
        }
    }

    info!(%report, "backfill complete");
    Ok(report)
}
