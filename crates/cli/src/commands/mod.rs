//! CLI command implementations.

pub mod backfill;
pub mod migrate;
pub mod seed;
pub mod token;
