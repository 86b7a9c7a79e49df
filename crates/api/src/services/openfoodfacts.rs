//! `OpenFoodFacts` client for nutrition lookups.
//!
//! One responsibility: given a non-empty free-text query (or barcode string),
//! fetch at most one candidate from the provider's search endpoint and reduce
//! it to the normalized [`NutritionRecord`]. The client never touches the
//! database; persistence is the caller's job.
//!
//! Callers get an explicit three-way outcome: `Ok(Lookup::Found)`,
//! `Ok(Lookup::NoMatch)`, or `Err(ProviderError)` - each call site decides
//! how hard a provider failure is allowed to hit its own contract.

use std::time::Duration;

use larder_core::NutritionRecord;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::ProviderConfig;

const SEARCH_PATH: &str = "/cgi/search.pl";
const USER_AGENT: &str = concat!("larder/", env!("CARGO_PKG_VERSION"));

/// Errors that can occur when querying the provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network, timeout, or response decode failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("provider returned status {0}")]
    Status(u16),
}

/// Outcome of a successful provider round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// First candidate, normalized.
    Found(NutritionRecord),
    /// Provider answered with zero candidates - distinct from failure.
    NoMatch,
}

/// `OpenFoodFacts` search client.
#[derive(Clone)]
pub struct OpenFoodFactsClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    /// Create a new client with the configured base URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Http` if the HTTP client fails to build.
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up the first search result for `query`.
    ///
    /// Requests exactly one candidate (`page_size=1`); the caller guarantees
    /// the query is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on network/timeout/decode failure or a
    /// non-success status.
    pub async fn search_first(&self, query: &str) -> Result<Lookup, ProviderError> {
        let url = format!("{}{SEARCH_PATH}", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("search_terms", query),
                ("search_simple", "1"),
                ("json", "1"),
                ("page_size", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body
            .products
            .into_iter()
            .next()
            .map_or(Lookup::NoMatch, |candidate| {
                Lookup::Found(candidate.into_record())
            }))
    }
}

/// Provider search response; only the candidate list matters.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<Candidate>,
}

/// One provider candidate, reduced to the fields we keep.
#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    nutriments: Map<String, Value>,
    serving_size: Option<String>,
    product_name: Option<String>,
}

impl Candidate {
    fn into_record(self) -> NutritionRecord {
        NutritionRecord {
            nutriments: self.nutriments,
            serving_size: self.serving_size,
            product_name: self.product_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Json, Router, http::StatusCode, routing::get};
    use serde_json::json;

    use super::*;

    const FIXTURE: &str = r#"{
        "count": 1,
        "page": 1,
        "products": [{
            "product_name": "Nutella",
            "serving_size": "15 g",
            "code": "3017620422003",
            "nutriments": {"energy-kcal_100g": 539, "fat_100g": 30.9},
            "brands": "Ferrero"
        }]
    }"#;

    #[test]
    fn test_first_candidate_normalized() {
        let body: SearchResponse = serde_json::from_str(FIXTURE).expect("deserialize");
        let record = body
            .products
            .into_iter()
            .next()
            .expect("candidate")
            .into_record();
        assert_eq!(record.product_name.as_deref(), Some("Nutella"));
        assert_eq!(record.serving_size.as_deref(), Some("15 g"));
        assert_eq!(record.nutriments["fat_100g"], json!(30.9));
        // Provider extras like `code` and `brands` are dropped.
        assert!(!record.to_value().as_object().expect("object").contains_key("code"));
    }

    #[test]
    fn test_missing_nutriments_defaults_to_empty() {
        let body: SearchResponse =
            serde_json::from_str(r#"{"products": [{"product_name": "Mystery"}]}"#)
                .expect("deserialize");
        let record = body
            .products
            .into_iter()
            .next()
            .expect("candidate")
            .into_record();
        assert!(record.nutriments.is_empty());
        assert!(record.serving_size.is_none());
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve");
        });
        format!("http://{addr}")
    }

    fn client_for(base_url: String) -> OpenFoodFactsClient {
        OpenFoodFactsClient::new(&ProviderConfig {
            base_url,
            timeout_secs: 5,
        })
        .expect("client")
    }

    #[tokio::test]
    async fn test_search_first_found() {
        let router = Router::new().route(
            SEARCH_PATH,
            get(|| async { serde_json::from_str::<Value>(FIXTURE).map(Json).expect("fixture") }),
        );
        let client = client_for(serve(router).await);

        let lookup = client.search_first("nutella").await.expect("lookup");
        match lookup {
            Lookup::Found(record) => {
                assert_eq!(record.product_name.as_deref(), Some("Nutella"));
            }
            Lookup::NoMatch => panic!("expected a match"),
        }
    }

    #[tokio::test]
    async fn test_search_first_no_match() {
        let router = Router::new().route(
            SEARCH_PATH,
            get(|| async { Json(json!({"count": 0, "products": []})) }),
        );
        let client = client_for(serve(router).await);

        let lookup = client
            .search_first("nonexistent-item-zzz")
            .await
            .expect("lookup");
        assert_eq!(lookup, Lookup::NoMatch);
    }

    #[tokio::test]
    async fn test_search_first_server_error() {
        let router = Router::new().route(
            SEARCH_PATH,
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let client = client_for(serve(router).await);

        match client.search_first("nutella").await {
            Err(ProviderError::Status(500)) => {}
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
