//! Configuration layering and recursive merge

use camino::Utf8Path;
use strata_core::types::{Mapping, Value};
use strata_core::utils::path::config_extension;
use tracing::debug;

use crate::{
    access::Config,
    parser::ParserRegistry,
    resolver::{self, PathSpec},
    ConfigResult,
};


/// Merge `incoming` into `base`.
///
/// When both sides are mappings they are merged key by key. In every other
/// case, sequences included, `incoming` replaces `base` outright.
pub fn merge_value(base: &mut Value, incoming: Value) {
    match (base, incoming) {
        (Value::Mapping(existing), Value::Mapping(next)) => merge_mapping(existing, next),
        (slot, next) => *slot = next,
    }
}

/// Merge every key of `incoming` into `base`, recursing into shared mappings.
///
/// Keys already in `base` keep their position; new keys are appended in the
/// order `incoming` lists them.
pub fn merge_mapping(base: &mut Mapping, incoming: Mapping) {
    for (key, value) in incoming {
        match base.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                base.insert(key, value);
            },
        }
    }
}

/// Main configuration loading interface.
///
/// Owns the parser registry and an optional defaults mapping that sits
/// beneath every loaded file. A loader can be reused; each call to
/// [`ConfigLoader::load`] starts from the defaults and shares no state with
/// earlier loads.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    registry: ParserRegistry,
    defaults: Mapping,
}

impl ConfigLoader {
    /// Create a loader that dispatches through `registry`
    pub fn new(registry: ParserRegistry) -> Self {
        Self {
            registry,
            defaults: Mapping::new(),
        }
    }

    /// Set values that every loaded file may override
    pub fn with_defaults(mut self, defaults: Mapping) -> Self {
        self.defaults = defaults;
        self
    }

    /// The registry used for extension dispatch
    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Resolve `spec`, parse every file in order and merge the results.
    ///
    /// Any failure aborts the whole load; no partially merged configuration
    /// is returned.
    pub fn load(&self, spec: impl Into<PathSpec>) -> ConfigResult<Config> {
        let spec = spec.into();
        let paths = resolver::resolve(&spec)?;

        let mut merged = self.defaults.clone();
        for path in &paths {
            let fragment = self.parse_file(path)?;
            debug!("Merging {} keys from {}", fragment.len(), path);
            merge_mapping(&mut merged, fragment);
        }

        Ok(Config::new(merged, paths))
    }

    /// Parse a single file with the parser registered for its extension
    pub fn parse_file(&self, path: &Utf8Path) -> ConfigResult<Mapping> {
        let extension = config_extension(path.as_std_path()).unwrap_or_default();
        let parser = self.registry.parser_for(&extension)?;

        debug!("Parsing {} as {}", path, parser.name());
        parser.parse(path)
    }
}
