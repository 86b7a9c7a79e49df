//! The normalized nutrition record stored on a product.
//!
//! This is the stable contract between the nutrition provider client and
//! storage: a reduced `{nutriments, serving_size, product_name}` shape,
//! independent of the provider's raw response. Arbitrary provider payloads
//! must never be persisted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Normalized nutritional metadata for a product.
///
/// `nutriments` is always present (possibly empty); `serving_size` and
/// `product_name` are optional and serialized as `null` when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    /// Nutrient name/value mapping as reported by the provider.
    #[serde(default)]
    pub nutriments: Map<String, Value>,
    /// Human-readable serving size (e.g., "30 g").
    pub serving_size: Option<String>,
    /// Product name as known to the provider.
    pub product_name: Option<String>,
}

impl NutritionRecord {
    /// Convert to a JSON value in the persisted shape.
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!({
            "nutriments": self.nutriments,
            "serving_size": self.serving_size,
            "product_name": self.product_name,
        })
    }
}

/// Whether a stored `nutritional_info` value still needs enrichment.
///
/// Null and empty-object values are treated identically as "missing". This is
/// a deliberate, uniform rule: seed data and older rows may carry `{}` where
/// enrichment never produced anything.
#[must_use]
pub fn needs_enrichment(nutritional_info: Option<&Value>) -> bool {
    match nutritional_info {
        None | Some(Value::Null) => true,
        Some(Value::Object(map)) => map.is_empty(),
        // Any other shape counts as present; the repository only ever writes
        // the normalized record, so this arm covers legacy rows at worst.
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_value_shape() {
        let mut nutriments = Map::new();
        nutriments.insert("energy-kcal_100g".to_string(), json!(539));

        let record = NutritionRecord {
            nutriments,
            serving_size: Some("15 g".to_string()),
            product_name: Some("Nutella".to_string()),
        };

        let value = record.to_value();
        assert!(value.get("nutriments").is_some_and(Value::is_object));
        assert_eq!(value["serving_size"], json!("15 g"));
        assert_eq!(value["product_name"], json!("Nutella"));
    }

    #[test]
    fn test_record_roundtrip() {
        let record = NutritionRecord {
            nutriments: Map::new(),
            serving_size: None,
            product_name: Some("Oats".to_string()),
        };
        let back: NutritionRecord =
            serde_json::from_value(record.to_value()).expect("deserialize");
        assert_eq!(back, record);
    }

    #[test]
    fn test_empty_object_deserializes_with_default_nutriments() {
        let record: NutritionRecord = serde_json::from_value(json!({})).expect("deserialize");
        assert!(record.nutriments.is_empty());
        assert!(record.serving_size.is_none());
    }

    #[test]
    fn test_needs_enrichment_null_and_empty_are_equivalent() {
        assert!(needs_enrichment(None));
        assert!(needs_enrichment(Some(&Value::Null)));
        assert!(needs_enrichment(Some(&json!({}))));
    }

    #[test]
    fn test_needs_enrichment_present_record() {
        let value = json!({"nutriments": {}, "serving_size": null, "product_name": null});
        assert!(!needs_enrichment(Some(&value)));
    }
}
