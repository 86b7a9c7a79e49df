//! Customer route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use larder_core::CustomerId;

use crate::db::CustomerRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{Customer, CustomerInput};
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
) -> Result<Json<Vec<Customer>>> {
    let customers = CustomerRepository::new(state.pool()).list().await?;
    Ok(Json(customers))
}

pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Json(input): Json<CustomerInput>,
) -> Result<(StatusCode, Json<Customer>)> {
    let customer = CustomerRepository::new(state.pool()).create(&input).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn show(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path(id): Path<CustomerId>,
) -> Result<Json<Customer>> {
    let customer = CustomerRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {id} does not exist")))?;
    Ok(Json(customer))
}

pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path(id): Path<CustomerId>,
    Json(input): Json<CustomerInput>,
) -> Result<Json<Customer>> {
    let customer = CustomerRepository::new(state.pool())
        .update(id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {id} does not exist")))?;
    Ok(Json(customer))
}

/// Delete a customer. The database cascades to the customer's invoices.
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path(id): Path<CustomerId>,
) -> Result<StatusCode> {
    let deleted = CustomerRepository::new(state.pool()).delete(id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("customer {id} does not exist")))
    }
}
