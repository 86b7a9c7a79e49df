//! Authentication middleware and extractors.
//!
//! Provides an extractor for requiring a valid bearer token on route
//! handlers. The verification keys are placed in request extensions at
//! router construction (`Extension(TokenKeys)`), so the extractor works
//! against any state type.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::services::auth::{Claims, TokenKeys};

/// Extractor that requires a valid bearer token.
///
/// Rejects with a uniform 401 JSON body when the Authorization header is
/// missing, malformed, or fails verification.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(claims): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", claims.sub)
/// }
/// ```
#[derive(Debug)]
pub struct RequireAuth(pub Claims);

/// Error returned when authentication is required but missing or invalid.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthRejection {
    /// No usable `Authorization: Bearer` header on the request.
    MissingToken,
    /// Token present but failed verification.
    InvalidToken,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let detail = match self {
            Self::MissingToken => "Authentication credentials were not provided",
            Self::InvalidToken => "Invalid or expired token",
        };
        (StatusCode::UNAUTHORIZED, Json(json!({ "detail": detail }))).into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Keys are installed by the router's Extension layer
        let keys = parts
            .extensions
            .get::<TokenKeys>()
            .ok_or(AuthRejection::MissingToken)?;

        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthRejection::MissingToken)?;

        let claims = keys
            .verify(token)
            .map_err(|_| AuthRejection::InvalidToken)?;

        Ok(Self(claims))
    }
}
