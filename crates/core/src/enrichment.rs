//! Enrichment policy: decide whether a product should be enriched and which
//! query to send to the nutrition provider.
//!
//! This is pure decision logic with no side effects. The API and the backfill
//! job both go through [`plan`] so the rules cannot drift apart.

use serde_json::Value;

use crate::types::nutrition::needs_enrichment;

/// Outcome of the enrichment policy for a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentPlan {
    /// Product already carries nutritional data; do nothing.
    Skip,
    /// Perform one provider lookup with this query.
    Lookup(String),
    /// Neither name nor brand gives a usable query; no network call may be
    /// attempted for this product.
    NoUsableQuery,
}

/// Compute the enrichment plan for a product.
///
/// Query selection order: the product name if non-empty after trimming,
/// otherwise the brand if non-empty, otherwise [`EnrichmentPlan::NoUsableQuery`].
#[must_use]
pub fn plan(name: &str, brand: &str, nutritional_info: Option<&Value>) -> EnrichmentPlan {
    if !needs_enrichment(nutritional_info) {
        return EnrichmentPlan::Skip;
    }
    if !name.trim().is_empty() {
        return EnrichmentPlan::Lookup(name.to_string());
    }
    if !brand.is_empty() {
        return EnrichmentPlan::Lookup(brand.to_string());
    }
    EnrichmentPlan::NoUsableQuery
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_skip_when_already_enriched() {
        let info = json!({"nutriments": {"fat_100g": 30.9}, "serving_size": null, "product_name": null});
        assert_eq!(plan("Nutella", "Ferrero", Some(&info)), EnrichmentPlan::Skip);
    }

    #[test]
    fn test_empty_object_still_needs_enrichment() {
        let info = json!({});
        assert_eq!(
            plan("Nutella", "Ferrero", Some(&info)),
            EnrichmentPlan::Lookup("Nutella".to_string())
        );
    }

    #[test]
    fn test_name_preferred_over_brand() {
        assert_eq!(
            plan("Crunchy Oats", "Acme", None),
            EnrichmentPlan::Lookup("Crunchy Oats".to_string())
        );
    }

    #[test]
    fn test_whitespace_name_falls_back_to_brand() {
        assert_eq!(
            plan("   ", "Acme", None),
            EnrichmentPlan::Lookup("Acme".to_string())
        );
    }

    #[test]
    fn test_empty_name_uses_brand() {
        assert_eq!(plan("", "Acme", None), EnrichmentPlan::Lookup("Acme".to_string()));
    }

    #[test]
    fn test_no_usable_query() {
        assert_eq!(plan("", "", None), EnrichmentPlan::NoUsableQuery);
        assert_eq!(plan("  ", "", Some(&json!(null))), EnrichmentPlan::NoUsableQuery);
    }
}
