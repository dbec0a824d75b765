//! Utility functions and helpers.
//!
//! Common functionality used across multiple Strata crates.

pub mod path;

// Re-export commonly used utilities
pub use path::{config_extension, split_optional, OPTIONAL_MARKER};
