//! Bearer-token minting command.
//!
//! The API never issues tokens itself; operators mint them here with the
//! same `LARDER_JWT_SECRET` the server verifies against.

use larder_api::config::{ApiConfig, ConfigError};
use larder_api::services::auth::{AuthError, TokenKeys};

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Token error: {0}")]
    Auth(#[from] AuthError),

    #[error("Invalid TTL: {0} (must be a positive number of hours)")]
    InvalidTtl(i64),
}

/// Mint a signed bearer token and print it to stdout.
///
/// # Errors
///
/// Returns an error if configuration loading or signing fails, or if the
/// TTL is not positive.
pub fn mint(subject: &str, ttl_hours: i64) -> Result<(), TokenError> {
    if ttl_hours <= 0 {
        return Err(TokenError::InvalidTtl(ttl_hours));
    }

    let config = ApiConfig::from_env()?;
    let keys = TokenKeys::new(&config.jwt_secret);
    let token = keys.issue(subject, chrono::Duration::hours(ttl_hours))?;

    #[allow(clippy::print_stdout)]
    {
        println!("{token}");
    }

    tracing::info!(%subject, ttl_hours, "Token minted");
    Ok(())
}
