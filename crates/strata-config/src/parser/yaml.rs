//! YAML configuration files

use strata_core::error::StrataError;
use strata_core::types::{Mapping, Value};

use super::FormatParser;
use crate::ConfigResult;

/// Parser for `.yaml` and `.yml` files.
///
/// Scalar mapping keys (numbers, booleans, null) are converted to strings;
/// sequence or mapping keys are rejected. Tags are dropped and the tagged
/// value is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl FormatParser for YamlParser {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn parse_str(&self, content: &str, origin: &str) -> ConfigResult<Value> {
        let document: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| StrataError::parse(self.name(), origin, e))?;

        from_yaml(document).map_err(|message| StrataError::parse(self.name(), origin, message))
    }
}

fn from_yaml(value: serde_yaml::Value) -> Result<Value, String> {
    let converted = match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
        },
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            Value::Sequence(items.into_iter().map(from_yaml).collect::<Result<_, _>>()?)
        },
        serde_yaml::Value::Mapping(map) => {
            let mut converted = Mapping::with_capacity(map.len());
            for (key, value) in map {
                converted.insert(key_to_string(key)?, from_yaml(value)?);
            }
            Value::Mapping(converted)
        },
        serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value)?,
    };

    Ok(converted)
}

fn key_to_string(key: serde_yaml::Value) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Ok(String::new()),
        serde_yaml::Value::Tagged(tagged) => key_to_string(tagged.value),
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => {
            Err("mapping keys must be scalars".to_string())
        },
    }
}
