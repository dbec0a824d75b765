//! `strata formats` command implementation.

use strata_config::ParserRegistry;
use strata_core::error::StrataResult;

use super::CommandContext;

/// Execute the `strata formats` command
pub fn execute(ctx: &CommandContext) -> StrataResult<()> {
    for (name, extensions) in format_rows(ctx.loader.registry()) {
        ctx.output.row(&format!("{:<5}", name), &extensions);
    }

    ctx.output.info("Files ending in '.dist' are read using the extension before it.");
    Ok(())
}

/// One row per parser in dispatch order: its name and dotted extensions
pub fn format_rows(registry: &ParserRegistry) -> Vec<(&'static str, String)> {
    registry
        .parsers()
        .map(|parser| {
            let extensions: Vec<String> = parser
                .supported_extensions()
                .iter()
                .map(|ext| format!(".{}", ext))
                .collect();
            (parser.name(), extensions.join(" "))
        })
        .collect()
}
