//! Invoice entity and request payload.

use chrono::{DateTime, Utc};
use larder_core::{CustomerId, InvoiceId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An invoice belonging to exactly one customer.
///
/// `created_at` is set once by the database and never updated. Invoices are
/// cascade-deleted with their customer, so `customer_id` always resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    /// Invoice total; serialized as a fixed-point string (e.g., `"99.90"`).
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or fully updating an invoice.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceInput {
    pub customer_id: CustomerId,
    pub total: Decimal,
}
