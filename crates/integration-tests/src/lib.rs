//! Integration tests for Larder.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply migrations
//! cargo run -p larder-cli -- migrate
//!
//! # Start the API server
//! cargo run -p larder-api
//!
//! # Mint a token and run the ignored tests
//! export LARDER_TEST_TOKEN=$(cargo run -p larder-cli -- token --subject tests)
//! cargo test -p larder-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `LARDER_BASE_URL` - API base URL (default: `http://localhost:8000`)
//! - `LARDER_TEST_TOKEN` - Bearer token for authenticated requests

use reqwest::{Client, RequestBuilder};

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("LARDER_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// Bearer token for authenticated requests, minted via `larder-cli token`.
///
/// # Panics
///
/// Panics when `LARDER_TEST_TOKEN` is unset so that a misconfigured test run
/// fails loudly instead of producing confusing 401s.
#[must_use]
pub fn test_token() -> String {
    std::env::var("LARDER_TEST_TOKEN")
        .expect("LARDER_TEST_TOKEN must be set (mint one with: larder-cli token --subject tests)")
}

/// Plain HTTP client without credentials.
///
/// # Panics
///
/// Panics if the client fails to build.
#[must_use]
pub fn client() -> Client {
    Client::builder().build().expect("Failed to create HTTP client")
}

/// Attach the test bearer token to a request.
#[must_use]
pub fn authenticated(request: RequestBuilder) -> RequestBuilder {
    request.bearer_auth(test_token())
}
