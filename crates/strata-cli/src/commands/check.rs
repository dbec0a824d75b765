//! `strata check` command implementation.
//!
//! Loads the configuration and reports which files were merged.

use strata_core::error::StrataResult;

use super::CommandContext;

/// Execute the `strata check` command
pub fn execute(paths: &[String], ctx: &CommandContext) -> StrataResult<()> {
    let config = ctx.load(paths)?;

    for (position, source) in config.sources().iter().enumerate() {
        ctx.output.row(&format!("{:>3}", position + 1), source.as_str());
    }

    if config.sources().is_empty() {
        ctx.output.warn("No configuration files matched; every path was optional and missing");
    } else {
        ctx.output.success(&format!(
            "Loaded {} files, {} keys",
            config.sources().len(),
            config.keys().len()
        ));
    }

    Ok(())
}
