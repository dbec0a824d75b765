//! `strata get` command implementation.
//!
//! Prints the value stored under a dotted key.

use strata_core::error::{StrataError, StrataResult};
use strata_core::types::Value;

use super::{suggest_similar_key, CommandContext};
use crate::{output, OutputFormat};

/// Execute the `strata get` command
pub fn execute(key: &str, paths: &[String], format: OutputFormat, ctx: &CommandContext) -> StrataResult<()> {
    let config = ctx.load(paths)?;

    let value = match config.require(key) {
        Ok(value) => value,
        Err(err @ StrataError::KeyNotFound { .. }) => {
            if let Some(suggestion) = suggest_similar_key(key, &config.keys()) {
                ctx.output.info(&format!("Did you mean '{}'?", suggestion));
            }
            return Err(err);
        },
        Err(err) => return Err(err),
    };

    ctx.output.data(&render_value(value, format)?);
    Ok(())
}

/// Scalars print bare; sequences and mappings use the structured format
pub fn render_value(value: &Value, format: OutputFormat) -> StrataResult<String> {
    if value.is_scalar() {
        Ok(value.to_string())
    } else {
        output::render(value, format)
    }
}
