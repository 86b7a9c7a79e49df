//! Core types for Larder.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod nutrition;

pub use id::*;
pub use nutrition::NutritionRecord;
