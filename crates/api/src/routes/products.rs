//! Product route handlers, including the enrichment endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use larder_core::{NutritionRecord, ProductId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::services::openfoodfacts::Lookup;
use crate::state::AppState;

/// List all products.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}

/// Create a product.
///
/// When the payload carries a non-blank `openfood_query` hint, one provider
/// lookup is attempted with that exact query and a successful result is
/// persisted before responding. Enrichment is best-effort: a no-match or
/// provider failure is logged and the product is returned unenriched -
/// creation never fails because enrichment failed.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Json(input): Json<CreateProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    validate_quantity(input.quantity)?;

    let repo = ProductRepository::new(state.pool());
    let mut product = repo.create(&input).await?;

    if let Some(query) = input
        .openfood_query
        .as_deref()
        .map(str::trim)
        .filter(|query| !query.is_empty())
    {
        match state.nutrition().search_first(query).await {
            Ok(Lookup::Found(record)) => match repo.set_nutritional_info(product.id, &record).await
            {
                Ok(()) => product.nutritional_info = Some(record.to_value()),
                Err(error) => {
                    warn!(product_id = %product.id, %query, %error, "failed to persist nutrition record at creation");
                }
            },
            Ok(Lookup::NoMatch) => {
                debug!(product_id = %product.id, %query, "no provider result at creation");
            }
            Err(error) => {
                warn!(product_id = %product.id, %query, %error, "nutrition lookup failed at creation");
            }
        }
    }

    Ok((StatusCode::CREATED, Json(product)))
}

/// Retrieve a product by ID.
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id} does not exist")))?;
    Ok(Json(product))
}

/// Fully update a product. Never touches `nutritional_info`.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path(id): Path<ProductId>,
    Json(input): Json<UpdateProduct>,
) -> Result<Json<Product>> {
    validate_quantity(input.quantity)?;

    let product = ProductRepository::new(state.pool())
        .update(id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id} does not exist")))?;
    Ok(Json(product))
}

/// Delete a product.
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    let deleted = ProductRepository::new(state.pool()).delete(id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("product {id} does not exist")))
    }
}

/// Body for the on-demand enrichment action. Either key works; barcode
/// strings are passed through to the provider as-is.
#[derive(Debug, Deserialize)]
pub struct EnrichRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub openfood_query: Option<String>,
}

/// Response from a successful enrichment.
#[derive(Debug, Serialize)]
pub struct EnrichResponse {
    pub detail: &'static str,
    pub nutritional_info: NutritionRecord,
}

/// On-demand enrichment of a single product.
///
/// This is the one place where a provider failure is surfaced to the caller
/// (502) rather than swallowed: performing the lookup is the endpoint's sole
/// purpose. A zero-candidate answer is a distinct 404; the product row is
/// only written on success.
pub async fn enrich(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path(id): Path<ProductId>,
    Json(request): Json<EnrichRequest>,
) -> Result<Json<EnrichResponse>> {
    let query = request
        .query
        .or(request.openfood_query)
        .filter(|query| !query.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("query is required".to_string()))?;

    let repo = ProductRepository::new(state.pool());
    let product = repo
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id} does not exist")))?;

    match state.nutrition().search_first(&query).await? {
        Lookup::Found(record) => {
            repo.set_nutritional_info(product.id, &record).await?;
            Ok(Json(EnrichResponse {
                detail: "enriched",
                nutritional_info: record,
            }))
        }
        Lookup::NoMatch => Err(AppError::NotFound(format!(
            "no nutrition match for \"{query}\""
        ))),
    }
}

fn validate_quantity(quantity: i32) -> Result<()> {
    if quantity < 0 {
        return Err(AppError::BadRequest(
            "quantity must be non-negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_validation() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(5).is_ok());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_enrich_request_accepts_either_key() {
        let request: EnrichRequest =
            serde_json::from_str(r#"{"query": "nutella"}"#).expect("deserialize");
        assert_eq!(request.query.as_deref(), Some("nutella"));

        let request: EnrichRequest =
            serde_json::from_str(r#"{"openfood_query": "3017620422003"}"#).expect("deserialize");
        assert_eq!(request.openfood_query.as_deref(), Some("3017620422003"));

        let request: EnrichRequest = serde_json::from_str("{}").expect("deserialize");
        assert!(request.query.is_none() && request.openfood_query.is_none());
    }
}
