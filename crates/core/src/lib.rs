//! Larder Core - Shared types library.
//!
//! This crate provides common types used across all Larder components:
//! - `api` - HTTP API server (CRUD + enrichment endpoints)
//! - `cli` - Command-line tools for migrations, backfill, and tokens
//!
//! # Architecture
//!
//! The core crate contains only types and pure decision logic - no I/O, no
//! database access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the normalized
//!   nutrition record
//! - [`enrichment`] - The enrichment policy: whether a product needs
//!   enrichment and which query to send to the provider

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod enrichment;
pub mod types;

pub use types::*;
