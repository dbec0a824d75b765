//! TOML configuration files

use strata_core::error::StrataError;
use strata_core::types::Value;

use super::FormatParser;
use crate::ConfigResult;

/// Parser for `.toml` files.
///
/// Datetimes have no counterpart in [`Value`] and are kept as their RFC 3339
/// string form.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlParser;

impl FormatParser for TomlParser {
    fn name(&self) -> &'static str {
        "TOML"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["toml"]
    }

    fn parse_str(&self, content: &str, origin: &str) -> ConfigResult<Value> {
        let document: ::toml::Table = ::toml::from_str(content)
            .map_err(|e| StrataError::parse(self.name(), origin, e.to_string().trim_end()))?;

        Ok(from_table(document))
    }
}

fn from_table(table: ::toml::Table) -> Value {
    Value::Mapping(table.into_iter().map(|(k, v)| (k, from_toml(v))).collect())
}

fn from_toml(value: ::toml::Value) -> Value {
    match value {
        ::toml::Value::String(s) => Value::String(s),
        ::toml::Value::Integer(i) => Value::Integer(i),
        ::toml::Value::Float(f) => Value::Float(f),
        ::toml::Value::Boolean(b) => Value::Bool(b),
        ::toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        ::toml::Value::Array(items) => Value::Sequence(items.into_iter().map(from_toml).collect()),
        ::toml::Value::Table(table) => from_table(table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tables_and_arrays() {
        let toml = r#"
title = "service"
retries = 3

[server]
host = "0.0.0.0"
port = 8080
features = ["tls", "gzip"]

[[upstream]]
name = "a"

[[upstream]]
name = "b"
"#;

        let value = TomlParser.parse_str(toml, "app.toml").unwrap();
        assert_eq!(value.lookup(["title"]), Some(&Value::from("service")));
        assert_eq!(value.lookup(["server", "port"]), Some(&Value::Integer(8080)));
        assert_eq!(value.lookup(["server", "features", "0"]), Some(&Value::from("tls")));
        assert_eq!(value.lookup(["upstream", "1", "name"]), Some(&Value::from("b")));
    }

    #[test]
    fn test_datetime_becomes_string() {
        let value = TomlParser.parse_str("released = 1979-05-27T07:32:00Z", "dates.toml").unwrap();
        assert_eq!(value.lookup(["released"]), Some(&Value::from("1979-05-27T07:32:00Z")));
    }

    #[test]
    fn test_empty_document_is_empty_mapping() {
        let value = TomlParser.parse_str("", "empty.toml").unwrap();
        assert_eq!(value, Value::mapping());
    }

    #[test]
    fn test_syntax_error() {
        let err = TomlParser.parse_str("[server\nport = 1", "bad.toml").unwrap_err();
        assert!(matches!(err, StrataError::Parse { ref format, .. } if format == "TOML"));
    }
}
