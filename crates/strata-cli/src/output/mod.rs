//! Terminal output formatting and utilities.
//!
//! This module provides consistent output formatting across all commands,
//! including colors, structured rendering and error messages.

pub mod colors;
pub mod errors;

use crate::OutputFormat;
use strata_core::error::{StrataError, StrataResult};
use strata_core::types::Value;

/// Output handler for consistent terminal formatting.
///
/// Data goes to stdout; status lines go to stderr so output stays pipeable.
pub struct OutputHandler {
    colors: colors::ColorSupport,
}

impl OutputHandler {
    /// Create a new output handler
    pub fn new() -> Self {
        Self {
            colors: colors::ColorSupport::detect(),
        }
    }

    /// Print command output
    pub fn data(&self, text: &str) {
        println!("{}", text.trim_end());
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        eprintln!("{}", self.colors.dim(message));
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", self.colors.green("✓"), message);
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", self.colors.yellow("⚠"), message);
    }

    /// Print a labelled row, label emphasised
    pub fn row(&self, label: &str, detail: &str) {
        println!("{}  {}", self.colors.bold(label), detail);
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a value as JSON or YAML
pub fn render(value: &Value, format: OutputFormat) -> StrataResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| StrataError::io("Failed to render JSON".to_string(), e.into())),
        OutputFormat::Yaml => serde_yaml::to_string(value).map_err(|e| {
            StrataError::io(
                "Failed to render YAML".to_string(),
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value {
        Value::from_iter([
            ("name", Value::from("api")),
            ("ports", Value::Sequence(vec![Value::from(80i64), Value::from(443i64)])),
        ])
    }

    #[test]
    fn test_render_json() {
        let rendered = render(&sample(), OutputFormat::Json).unwrap();
        assert_eq!(rendered, "{\n  \"name\": \"api\",\n  \"ports\": [\n    80,\n    443\n  ]\n}");
    }

    #[test]
    fn test_render_yaml() {
        let rendered = render(&sample(), OutputFormat::Yaml).unwrap();
        assert_eq!(rendered, "name: api\nports:\n- 80\n- 443\n");
    }
}
