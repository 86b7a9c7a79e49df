//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ApiConfig;
use crate::services::auth::TokenKeys;
use crate::services::openfoodfacts::{OpenFoodFactsClient, ProviderError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool and the nutrition client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    pool: PgPool,
    nutrition: OpenFoodFactsClient,
    tokens: TokenKeys,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the nutrition HTTP client fails to build.
    pub fn new(config: ApiConfig, pool: PgPool) -> Result<Self, ProviderError> {
        let nutrition = OpenFoodFactsClient::new(&config.provider)?;
        let tokens = TokenKeys::new(&config.jwt_secret);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                nutrition,
                tokens,
            }),
        })
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the nutrition provider client.
    #[must_use]
    pub fn nutrition(&self) -> &OpenFoodFactsClient {
        &self.inner.nutrition
    }

    /// Get a reference to the bearer-token keys.
    #[must_use]
    pub fn tokens(&self) -> &TokenKeys {
        &self.inner.tokens
    }
}
