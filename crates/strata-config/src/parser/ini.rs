//! INI configuration files
//!
//! Supported syntax:
//! - `[section]` headers; keys below a header nest under the section name
//! - `key = value` pairs; a repeated key overrides the earlier one
//! - `key[] = value` appends to a sequence
//! - `;` and `#` full-line comments, `;` trailing comments after any value
//! - single or double quoted strings, kept verbatim up to the closing quote
//! - unquoted `true`/`on`/`yes`, `false`/`off`/`no`/`none`, `null`, integers
//!   and floats are typed; everything else is a string

use strata_core::error::StrataError;
use strata_core::types::{Mapping, Value};

use super::FormatParser;
use crate::ConfigResult;

/// Parser for `.ini` files
#[derive(Debug, Clone, Copy, Default)]
pub struct IniParser;

impl FormatParser for IniParser {
    fn name(&self) -> &'static str {
        "INI"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["ini"]
    }

    fn parse_str(&self, content: &str, origin: &str) -> ConfigResult<Value> {
        parse_ini(content)
            .map(Value::Mapping)
            .map_err(|(line, message)| StrataError::parse(self.name(), origin, format!("line {}: {}", line, message)))
    }
}

type LineError = (usize, String);

fn parse_ini(content: &str) -> Result<Mapping, LineError> {
    let mut root = Mapping::new();
    let mut section: Option<String> = None;

    for (index, raw_line) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or_else(|| (line_no, "unterminated section header".to_string()))?
                .trim();
            if name.is_empty() {
                return Err((line_no, "empty section name".to_string()));
            }

            match root.get(name) {
                Some(existing) if !existing.is_mapping() => {
                    return Err((line_no, format!("section '{}' conflicts with an existing key", name)));
                },
                Some(_) => {},
                None => {
                    root.insert(name.to_string(), Value::mapping());
                },
            }
            section = Some(name.to_string());
            continue;
        }

        let (key, raw_value) = line
            .split_once('=')
            .ok_or_else(|| (line_no, format!("expected 'key = value', found '{}'", line)))?;
        let key = key.trim();
        if key.is_empty() {
            return Err((line_no, "missing key before '='".to_string()));
        }

        let target = match &section {
            None => &mut root,
            Some(name) => root
                .get_mut(name)
                .and_then(Value::as_mapping_mut)
                .ok_or_else(|| (line_no, format!("section '{}' was overwritten", name)))?,
        };

        let value = parse_scalar(raw_value.trim()).map_err(|message| (line_no, message))?;
        insert_entry(target, key, value).map_err(|message| (line_no, message))?;
    }

    Ok(root)
}

fn insert_entry(target: &mut Mapping, key: &str, value: Value) -> Result<(), String> {
    let Some(name) = key.strip_suffix("[]").map(str::trim_end) else {
        target.insert(key.to_string(), value);
        return Ok(());
    };

    match target
        .entry(name.to_string())
        .or_insert_with(|| Value::Sequence(Vec::new()))
    {
        Value::Sequence(items) => {
            items.push(value);
            Ok(())
        },
        other => Err(format!("cannot append to '{}', which is a {}", name, other.type_name())),
    }
}

fn parse_scalar(raw: &str) -> Result<Value, String> {
    if let Some(quote) = raw.chars().next().filter(|c| matches!(c, '"' | '\'')) {
        return parse_quoted(&raw[1..], quote).map(Value::String);
    }

    let raw = match raw.find(';') {
        Some(pos) => raw[..pos].trim_end(),
        None => raw,
    };

    match raw.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" => return Ok(Value::Bool(true)),
        "false" | "off" | "no" | "none" => return Ok(Value::Bool(false)),
        "null" => return Ok(Value::Null),
        _ => {},
    }

    if let Ok(i) = raw.parse::<i64>() {
        return Ok(Value::Integer(i));
    }

    if looks_numeric(raw) {
        if let Ok(f) = raw.parse::<f64>() {
            return Ok(Value::Float(f));
        }
    }

    Ok(Value::String(raw.to_string()))
}

/// Take everything up to the closing `quote`; only a `;` comment may follow it
fn parse_quoted(body: &str, quote: char) -> Result<String, String> {
    let end = body
        .find(quote)
        .ok_or_else(|| format!("unterminated {} quoted value", quote))?;

    let trailing = body[end + 1..].trim_start();
    if !trailing.is_empty() && !trailing.starts_with(';') {
        return Err(format!("unexpected '{}' after quoted value", trailing));
    }

    Ok(body[..end].to_string())
}

// Keeps words like "inf" and "NaN" as strings
fn looks_numeric(raw: &str) -> bool {
    raw.chars().any(|c| c.is_ascii_digit())
        && raw
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
}
