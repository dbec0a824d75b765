//! Read-only access to a merged configuration

use camino::Utf8PathBuf;
use serde::de::DeserializeOwned;
use strata_core::error::StrataError;
use strata_core::types::{Mapping, Value};

use crate::{merge::ConfigLoader, resolver::PathSpec, ConfigResult};

/// Separator between segments of a key path
const KEY_SEPARATOR: char = '.';

/// The result of a configuration load.
///
/// Keys are addressed with dotted paths: `db.host` walks into the `db`
/// mapping, and numeric segments index into sequences (`servers.0.port`).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    data: Mapping,
    sources: Vec<Utf8PathBuf>,
}

impl Config {
    /// Wrap an already merged mapping
    pub fn new(data: Mapping, sources: Vec<Utf8PathBuf>) -> Self {
        Self { data, sources }
    }

    /// Load `spec` with the default parser registry
    pub fn load(spec: impl Into<PathSpec>) -> ConfigResult<Self> {
        ConfigLoader::default().load(spec)
    }

    /// Look up a dotted key.
    ///
    /// If the dotted walk finds nothing, a top-level key spelled exactly as
    /// `key` (dots included) is tried before giving up.
    pub fn get(&self, key: &str) -> Option<&Value> {
        if key.is_empty() {
            return None;
        }

        let mut segments = key.split(KEY_SEPARATOR);
        let head = segments.next()?;
        self.data
            .get(head)
            .and_then(|value| value.lookup(segments))
            .or_else(|| self.data.get(key))
    }

    /// Look up a dotted key, falling back to `default`
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.get(key).unwrap_or(default)
    }

    /// Look up a dotted key that must be present
    pub fn require(&self, key: &str) -> ConfigResult<&Value> {
        self.get(key).ok_or_else(|| StrataError::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Whether a dotted key is present. A key holding `null` is present.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Deserialize the value at a dotted key into `T`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> ConfigResult<Option<T>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };

        let conversion_error = |e: serde_json::Error| StrataError::Conversion {
            key: key.to_string(),
            message: e.to_string(),
        };
        let json = serde_json::to_value(value).map_err(conversion_error)?;
        serde_json::from_value(json).map(Some).map_err(conversion_error)
    }

    /// The complete merged mapping
    pub fn all(&self) -> &Mapping {
        &self.data
    }

    /// Every dotted key reachable through nested mappings, parents before
    /// children, in merged order
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(&self.data, None, &mut keys);
        keys
    }

    /// Files that were merged, in merge order
    pub fn sources(&self) -> &[Utf8PathBuf] {
        &self.sources
    }

    /// Consume the config and return the merged mapping as a value
    pub fn into_value(self) -> Value {
        Value::Mapping(self.data)
    }
}

impl From<Mapping> for Config {
    fn from(data: Mapping) -> Self {
        Self::new(data, Vec::new())
    }
}

fn collect_keys(map: &Mapping, prefix: Option<&str>, keys: &mut Vec<String>) {
    for (key, value) in map {
        let path = match prefix {
            Some(prefix) => format!("{}{}{}", prefix, KEY_SEPARATOR, key),
            None => key.clone(),
        };

        if let Value::Mapping(child) = value {
            keys.push(path.clone());
            collect_keys(child, Some(&path), keys);
        } else {
            keys.push(path);
        }
    }
}
