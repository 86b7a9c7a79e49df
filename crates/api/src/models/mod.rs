//! Persisted entity models and request payloads.
//!
//! Field lists are explicit and versioned here - the external contract does
//! not change just because a column is added.

pub mod customer;
pub mod invoice;
pub mod product;

pub use customer::{Customer, CustomerInput};
pub use invoice::{Invoice, InvoiceInput};
pub use product::{CreateProduct, Product, UpdateProduct};
