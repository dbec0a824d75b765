//! Core data types for Strata configuration loading.
//!
//! This module provides the value model every format parser lowers into.

pub mod value;

// Re-export all public types
pub use value::{Mapping, Value};
