//! Layered configuration loading for Strata
//!
//! This crate turns a path specifier (a file, a directory, or an ordered list
//! of either, with `?`-prefixed entries allowed to be missing) into a single
//! merged configuration. Each file is parsed by the first registered format
//! parser that claims its extension, and fragments are deep-merged in order
//! so later files override earlier ones.

pub mod access;
pub mod merge;
pub mod parser;
pub mod resolver;

// Re-export main types
pub use access::Config;
pub use merge::{merge_mapping, merge_value, ConfigLoader};
pub use parser::{
    FormatParser, IniParser, JsonParser, ParserRegistry, TomlParser, XmlParser, YamlParser,
};
pub use resolver::{resolve, PathSpec};

use strata_core::error::StrataError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, StrataError>;
