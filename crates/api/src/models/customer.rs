//! Customer entity and request payload.

use larder_core::CustomerId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer who can own invoices.
///
/// The phone number acts as an external identifier when present: the schema
/// enforces uniqueness for non-blank phones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

/// Payload for creating or fully updating a customer.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerInput {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
}
