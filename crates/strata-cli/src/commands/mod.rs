//! Command implementations and dispatch logic.
//!
//! This module contains all command handlers and the central dispatch system.
//! Each command is implemented as a function that takes a CommandContext.

use strata_config::{Config, ConfigLoader, PathSpec};
use strata_core::error::StrataResult;
use tracing::info;

pub mod check;
pub mod formats;
pub mod get;
pub mod show;


use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub output: OutputHandler,
    pub loader: ConfigLoader,
}

impl CommandContext {
    /// Create a new command context with the default parser registry
    pub fn new() -> Self {
        Self {
            output: OutputHandler::new(),
            loader: ConfigLoader::default(),
        }
    }

    /// Load and merge the configuration named by command-line paths
    pub fn load(&self, paths: &[String]) -> StrataResult<Config> {
        self.loader.load(path_spec(paths))
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a path specifier from command-line arguments.
///
/// Arguments always form a list, so a leading `?` marks any of them optional.
pub fn path_spec(paths: &[String]) -> PathSpec {
    PathSpec::List(paths.iter().cloned().map(PathSpec::from).collect())
}

/// Dispatch a command to its handler
pub fn dispatch_command(command: Commands, ctx: &CommandContext) -> StrataResult<()> {
    match command {
        Commands::Show { paths, format } => {
            info!("Showing merged configuration from {} paths", paths.len());
            show::execute(&paths, format, ctx)
        },
        Commands::Get { key, paths, format } => {
            info!("Reading key '{}'", key);
            get::execute(&key, &paths, format, ctx)
        },
        Commands::Check { paths } => {
            info!("Checking configuration");
            check::execute(&paths, ctx)
        },
        Commands::Formats => formats::execute(ctx),
    }
}

/// Suggest the known key closest to `input` by edit distance
pub fn suggest_similar_key(input: &str, candidates: &[String]) -> Option<String> {
    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in candidates {
        let distance = edit_distance(input, candidate);
        if distance < best_distance && distance <= 2 {
            best_distance = distance;
            best_match = Some(candidate);
        }
    }

    best_match.cloned()
}

/// Levenshtein distance between two strings, computed one row at a time
fn edit_distance(a: &str, b: &str) -> usize {
    let target: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=target.len()).collect();
    let mut current = vec![0; target.len() + 1];

    for (i, source_char) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, target_char) in target.iter().enumerate() {
            let replace = previous[j] + usize::from(source_char != *target_char);
            let delete = previous[j + 1] + 1;
            let insert = current[j] + 1;
            current[j + 1] = replace.min(delete).min(insert);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[target.len()]
}
