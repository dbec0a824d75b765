//! JSON configuration files

use strata_core::error::StrataError;
use strata_core::types::Value;

use super::FormatParser;
use crate::ConfigResult;

/// Parser for `.json` files
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl FormatParser for JsonParser {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn parse_str(&self, content: &str, origin: &str) -> ConfigResult<Value> {
        let document: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| StrataError::parse(self.name(), origin, e))?;

        Ok(from_json(document))
    }
}

fn from_json(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            // u64 beyond i64::MAX and fractional numbers
            None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => Value::Sequence(items.into_iter().map(from_json).collect()),
        serde_json::Value::Object(map) => {
            Value::Mapping(map.into_iter().map(|(k, v)| (k, from_json(v))).collect())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_document() {
        let json = r#"
{
  "name": "api",
  "port": 8080,
  "ratio": 0.75,
  "debug": false,
  "tags": ["a", "b"],
  "db": { "host": "localhost", "pool": null }
}
"#;

        let value = JsonParser.parse_str(json, "app.json").unwrap();
        assert_eq!(value.lookup(["name"]), Some(&Value::from("api")));
        assert_eq!(value.lookup(["port"]), Some(&Value::Integer(8080)));
        assert_eq!(value.lookup(["ratio"]), Some(&Value::Float(0.75)));
        assert_eq!(value.lookup(["debug"]), Some(&Value::Bool(false)));
        assert_eq!(value.lookup(["tags", "1"]), Some(&Value::from("b")));
        assert_eq!(value.lookup(["db", "pool"]), Some(&Value::Null));
    }

    #[test]
    fn test_key_order_preserved() {
        let value = JsonParser.parse_str(r#"{"b": 1, "a": 2, "c": 3}"#, "order.json").unwrap();
        let keys: Vec<&String> = value.as_mapping().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_large_unsigned_becomes_float() {
        let value = JsonParser.parse_str(r#"{"big": 18446744073709551615}"#, "big.json").unwrap();
        assert!(matches!(value.lookup(["big"]), Some(Value::Float(_))));
    }

    #[test]
    fn test_syntax_error() {
        let err = JsonParser.parse_str("{ \"unterminated\": ", "broken.json").unwrap_err();
        assert!(matches!(err, StrataError::Parse { ref format, ref path, .. } if format == "JSON" && path == "broken.json"));
    }
}
