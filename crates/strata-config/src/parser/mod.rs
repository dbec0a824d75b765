//! Format parsers and extension dispatch
//!
//! A [`FormatParser`] turns one file into a mapping. The [`ParserRegistry`]
//! holds an ordered list of parsers and hands out the first one that claims a
//! given extension.

use std::fmt;

use camino::Utf8Path;
use strata_core::error::StrataError;
use strata_core::types::{Mapping, Value};
use tracing::debug;

use crate::ConfigResult;

mod ini;
mod json;
mod toml;
mod xml;
mod yaml;

pub use self::ini::IniParser;
pub use self::json::JsonParser;
pub use self::toml::TomlParser;
pub use self::xml::XmlParser;
pub use self::yaml::YamlParser;

/// A configuration file format
pub trait FormatParser: Send + Sync {
    /// Human-readable format name, used in error messages
    fn name(&self) -> &'static str;

    /// File extensions this parser handles, lowercase and without the dot
    fn supported_extensions(&self) -> &[&str];

    /// Parse file content. `origin` names the source in error messages.
    fn parse_str(&self, content: &str, origin: &str) -> ConfigResult<Value>;

    /// Read and parse a file into a mapping.
    ///
    /// The file is read in full and closed before parsing starts. An empty
    /// document yields an empty mapping; any other non-mapping document is
    /// rejected.
    fn parse(&self, path: &Utf8Path) -> ConfigResult<Mapping> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| StrataError::io(format!("Failed to read {}", path), e))?;

        let value = self.parse_str(&content, path.as_str())?;
        into_fragment(value, self.name(), path.as_str())
    }

    /// Whether this parser claims the extension (ASCII case-insensitive)
    fn supports(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(extension))
    }
}

/// Convert a parsed document into a mergeable mapping
pub fn into_fragment(value: Value, format: &str, origin: &str) -> ConfigResult<Mapping> {
    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        other => Err(StrataError::parse(
            format,
            origin,
            format!("top-level value must be a mapping, found {}", other.type_name()),
        )),
    }
}

/// Ordered, immutable set of format parsers
pub struct ParserRegistry {
    parsers: Vec<Box<dyn FormatParser>>,
}

impl ParserRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Append a parser; earlier parsers win when extensions overlap
    pub fn with_parser<P: FormatParser + 'static>(mut self, parser: P) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }

    /// Select the first registered parser that supports `extension`
    pub fn parser_for(&self, extension: &str) -> ConfigResult<&dyn FormatParser> {
        let parser = self
            .parsers
            .iter()
            .find(|parser| parser.supports(extension))
            .ok_or_else(|| StrataError::UnsupportedFormat {
                extension: extension.to_string(),
            })?;

        debug!("Dispatching '{}' to {} parser", extension, parser.name());
        Ok(parser.as_ref())
    }

    /// Whether any registered parser supports `extension`
    pub fn supports(&self, extension: &str) -> bool {
        self.parsers.iter().any(|parser| parser.supports(extension))
    }

    /// Iterate over the registered parsers in dispatch order
    pub fn parsers(&self) -> impl Iterator<Item = &dyn FormatParser> {
        self.parsers.iter().map(|parser| parser.as_ref())
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl Default for ParserRegistry {
    /// INI, JSON, TOML, XML and YAML, in that order
    fn default() -> Self {
        Self::new()
            .with_parser(IniParser)
            .with_parser(JsonParser)
            .with_parser(TomlParser)
            .with_parser(XmlParser)
            .with_parser(YamlParser)
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.parsers.iter().map(|parser| parser.name()))
            .finish()
    }
}
