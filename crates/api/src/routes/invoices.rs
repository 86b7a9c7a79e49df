//! Invoice route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use larder_core::InvoiceId;

use crate::db::{CustomerRepository, InvoiceRepository};
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{Invoice, InvoiceInput};
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
) -> Result<Json<Vec<Invoice>>> {
    let invoices = InvoiceRepository::new(state.pool()).list().await?;
    Ok(Json(invoices))
}

/// Create an invoice. The referenced customer must exist; `created_at` is
/// assigned by the database.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Json(input): Json<InvoiceInput>,
) -> Result<(StatusCode, Json<Invoice>)> {
    ensure_customer_exists(&state, &input).await?;
    let invoice = InvoiceRepository::new(state.pool()).create(&input).await?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

pub async fn show(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path(id): Path<InvoiceId>,
) -> Result<Json<Invoice>> {
    let invoice = InvoiceRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("invoice {id} does not exist")))?;
    Ok(Json(invoice))
}

pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path(id): Path<InvoiceId>,
    Json(input): Json<InvoiceInput>,
) -> Result<Json<Invoice>> {
    ensure_customer_exists(&state, &input).await?;
    let invoice = InvoiceRepository::new(state.pool())
        .update(id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("invoice {id} does not exist")))?;
    Ok(Json(invoice))
}

pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path(id): Path<InvoiceId>,
) -> Result<StatusCode> {
    let deleted = InvoiceRepository::new(state.pool()).delete(id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("invoice {id} does not exist")))
    }
}

async fn ensure_customer_exists(state: &AppState, input: &InvoiceInput) -> Result<()> {
    let exists = CustomerRepository::new(state.pool())
        .get(input.customer_id)
        .await?
        .is_some();
    if exists {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "customer {} does not exist",
            input.customer_id
        )))
    }
}
