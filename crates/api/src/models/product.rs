//! Product entity and request payloads.

use larder_core::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// An inventory product.
///
/// `nutritional_info` is absent until enrichment succeeds; once written it
/// always has the normalized `{nutriments, serving_size, product_name}` shape
/// (only `ProductRepository::set_nutritional_info` writes it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price; serialized as a fixed-point string (e.g., `"1.00"`).
    pub price: Decimal,
    pub brand: String,
    pub picture: String,
    pub category: String,
    pub nutritional_info: Option<Value>,
    pub quantity: i32,
}

/// Payload for `POST /api/products`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub quantity: i32,
    /// Optional enrichment hint: when present and non-blank, one provider
    /// lookup is attempted with this exact query before the response is
    /// returned. Never derived from other fields, never persisted.
    #[serde(default)]
    pub openfood_query: Option<String>,
}

/// Payload for `PUT /api/products/{id}` (full update).
///
/// Enrichment hints are only honored at creation; updates never trigger a
/// provider call and never touch `nutritional_info`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_product_minimal_payload() {
        let input: CreateProduct =
            serde_json::from_str(r#"{"name": "Test", "price": "1.00", "quantity": 5}"#)
                .expect("deserialize");
        assert_eq!(input.name, "Test");
        assert_eq!(input.price, Decimal::new(100, 2));
        assert_eq!(input.quantity, 5);
        assert_eq!(input.brand, "");
        assert!(input.openfood_query.is_none());
    }

    #[test]
    fn test_product_price_serializes_as_string() {
        let product = Product {
            id: ProductId::new(1),
            name: "Test".to_string(),
            price: Decimal::new(1250, 2),
            brand: String::new(),
            picture: String::new(),
            category: String::new(),
            nutritional_info: None,
            quantity: 0,
        };
        let json = serde_json::to_value(&product).expect("serialize");
        assert_eq!(json["price"], serde_json::json!("12.50"));
        assert_eq!(json["nutritional_info"], serde_json::Value::Null);
    }
}
