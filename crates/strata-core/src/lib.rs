//! # strata-core
//!
//! Core types and utilities shared across all Strata crates.
//!
//! This crate provides:
//! - `Value`, the tagged configuration value (scalar, sequence or mapping)
//! - `StrataError` enum for unified error handling
//! - Path helpers for configuration file names
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (Value, Mapping)
//! - `error`: Error types and result aliases
//! - `utils`: Utility functions and helpers

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{StrataError, StrataResult};
pub use types::{Mapping, Value};
