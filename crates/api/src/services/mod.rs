//! External services and the enrichment workflow.
//!
//! - [`auth`] - Bearer-token signing and verification
//! - [`openfoodfacts`] - Nutrition provider client
//! - [`enrichment`] - Batch backfill over the provider client and the
//!   product store

pub mod auth;
pub mod enrichment;
pub mod openfoodfacts;

pub use auth::{AuthError, Claims, TokenKeys};
pub use enrichment::{BackfillOptions, BackfillReport, run_backfill};
pub use openfoodfacts::{Lookup, OpenFoodFactsClient, ProviderError};
