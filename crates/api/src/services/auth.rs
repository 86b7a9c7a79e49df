//! Bearer-token signing and verification.
//!
//! Token *issuance* is deliberately kept off the HTTP surface: operators mint
//! tokens with `larder-cli token`, the server only verifies them. Claims are
//! standard HS256 `{sub, iat, exp}`.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from token operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token failed signature, shape, or expiry validation.
    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

/// JWT claims carried by every authenticated request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (caller identity, e.g., an operator name).
    pub sub: String,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

/// Signing and verification keys derived from the configured secret.
///
/// Cheap to clone; a copy is placed in request extensions for the
/// `RequireAuth` extractor.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    /// Derive HS256 keys from the shared secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        }
    }

    /// Mint a token for `subject` valid for `ttl`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if encoding fails.
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` for bad signatures, malformed
    /// tokens, or expired claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenKeys {
        TokenKeys::new(&SecretString::from("0123456789abcdef0123456789abcdef"))
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let keys = keys();
        let token = keys.issue("ops", Duration::hours(1)).expect("issue");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, "ops");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let keys = keys();
        // Expired well past the default validation leeway.
        let token = keys.issue("ops", Duration::hours(-2)).expect("issue");
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(keys().verify("not-a-jwt").is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = keys().issue("ops", Duration::hours(1)).expect("issue");
        let other = TokenKeys::new(&SecretString::from("ffffffffffffffffffffffffffffffff"));
        assert!(other.verify(&token).is_err());
    }
}
