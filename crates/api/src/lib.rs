//! Larder API server.
//!
//! Inventory and invoicing backend: product, customer, and invoice CRUD
//! behind bearer-token auth, plus nutrition enrichment of products from
//! the OpenFoodFacts public database.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
