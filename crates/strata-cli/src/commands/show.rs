//! `strata show` command implementation.
//!
//! Prints the fully merged configuration.

use strata_config::Config;
use strata_core::error::StrataResult;
use strata_core::types::Value;

use super::CommandContext;
use crate::{output, OutputFormat};

/// Execute the `strata show` command
pub fn execute(paths: &[String], format: OutputFormat, ctx: &CommandContext) -> StrataResult<()> {
    let config = ctx.load(paths)?;
    ctx.output.data(&render_config(&config, format)?);
    Ok(())
}

/// Render the whole merged mapping
pub fn render_config(config: &Config, format: OutputFormat) -> StrataResult<String> {
    output::render(&Value::Mapping(config.all().clone()), format)
}
