//! Path specifier resolution
//!
//! Expands a [`PathSpec`] into the ordered list of concrete files that will be
//! parsed and merged. Directories are expanded one level deep, lists are
//! expanded element by element, and `?`-prefixed list entries that do not
//! exist are skipped.

use camino::{Utf8Path, Utf8PathBuf};
use glob::{MatchOptions, Pattern};
use strata_core::error::StrataError;
use strata_core::utils::path::{split_optional, OPTIONAL_MARKER};
use tracing::{debug, trace};

use crate::ConfigResult;

/// Pattern matched inside a configuration directory: any name with an extension
const DIRECTORY_PATTERN: &str = "*.*";

/// One or more configuration sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSpec {
    /// A file or directory. Inside a list, a leading `?` marks it optional.
    Path(String),
    /// Ordered sources; later entries take precedence when merged
    List(Vec<PathSpec>),
}

impl PathSpec {
    /// Create an optional path entry
    pub fn optional(path: impl AsRef<str>) -> Self {
        PathSpec::Path(format!("{}{}", OPTIONAL_MARKER, path.as_ref()))
    }

    /// Whether this entry carries the optional marker
    pub fn is_optional(&self) -> bool {
        match self {
            PathSpec::Path(raw) => split_optional(raw).0,
            PathSpec::List(_) => false,
        }
    }
}

impl From<&str> for PathSpec {
    fn from(path: &str) -> Self {
        PathSpec::Path(path.to_string())
    }
}

impl From<String> for PathSpec {
    fn from(path: String) -> Self {
        PathSpec::Path(path)
    }
}

impl From<&Utf8Path> for PathSpec {
    fn from(path: &Utf8Path) -> Self {
        PathSpec::Path(path.to_string())
    }
}

impl From<Utf8PathBuf> for PathSpec {
    fn from(path: Utf8PathBuf) -> Self {
        PathSpec::Path(path.into_string())
    }
}

impl<T: Into<PathSpec>> From<Vec<T>> for PathSpec {
    fn from(entries: Vec<T>) -> Self {
        PathSpec::List(entries.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PathSpec>, const N: usize> From<[T; N]> for PathSpec {
    fn from(entries: [T; N]) -> Self {
        PathSpec::List(entries.into_iter().map(Into::into).collect())
    }
}

/// Resolve a path specifier to the ordered list of files it denotes.
///
/// A single path resolves to itself if it is a regular file, or to the
/// extension-bearing files directly inside it (sorted by name) if it is a
/// directory. Lists resolve element by element and concatenate.
///
/// # Errors
/// - `PathNotFound` if a required path does not exist. A bare path is always
///   required, even when written with the optional marker; only list entries
///   can be skipped.
/// - `EmptyDirectory` if a directory holds no files with an extension. This
///   is raised for optional entries too.
pub fn resolve(spec: &PathSpec) -> ConfigResult<Vec<Utf8PathBuf>> {
    match spec {
        PathSpec::List(entries) => resolve_list(entries),
        PathSpec::Path(raw) => {
            let (_, path) = split_optional(raw);
            resolve_path(Utf8Path::new(path))
        },
    }
}

fn resolve_list(entries: &[PathSpec]) -> ConfigResult<Vec<Utf8PathBuf>> {
    let mut paths = Vec::new();

    for entry in entries {
        match resolve(entry) {
            Ok(found) => paths.extend(found),
            Err(err) if err.is_not_found() && entry.is_optional() => {
                debug!("Skipping missing optional configuration path: {:?}", entry);
            },
            Err(err) => return Err(err),
        }
    }

    Ok(paths)
}

fn resolve_path(path: &Utf8Path) -> ConfigResult<Vec<Utf8PathBuf>> {
    if path.is_dir() {
        return resolve_directory(path);
    }

    if path.is_file() {
        debug!("Resolved configuration file: {}", path);
        return Ok(vec![path.to_path_buf()]);
    }

    Err(StrataError::PathNotFound {
        path: path.to_string(),
    })
}

fn resolve_directory(dir: &Utf8Path) -> ConfigResult<Vec<Utf8PathBuf>> {
    let pattern = Utf8PathBuf::from(Pattern::escape(dir.as_str())).join(DIRECTORY_PATTERN);
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let entries = glob::glob_with(pattern.as_str(), options).map_err(|e| StrataError::InvalidPath {
        path: dir.to_string(),
        reason: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let message = format!("Failed to read configuration directory {}", dir);
            StrataError::io(message, e.into_error())
        })?;

        if !path.is_file() {
            trace!("Ignoring non-file entry {}", path.display());
            continue;
        }

        let path = Utf8PathBuf::from_path_buf(path).map_err(|p| StrataError::InvalidPath {
            path: p.display().to_string(),
            reason: "path is not valid UTF-8".to_string(),
        })?;
        trace!("Found configuration file {}", path);
        files.push(path);
    }

    if files.is_empty() {
        return Err(StrataError::EmptyDirectory {
            path: dir.to_string(),
        });
    }

    debug!("Resolved {} configuration files in {}", files.len(), dir);
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn utf8_root(temp_dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap()
    }

    fn touch(path: &Utf8Path) {
        fs::write(path, "{}").unwrap();
    }

    #[test]
    fn test_resolve_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);
        let file = root.join("app.json");
        touch(&file);

        let resolved = resolve(&PathSpec::from(file.as_path())).unwrap();
        assert_eq!(resolved, vec![file]);
    }

    #[test]
    fn test_resolve_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);

        let err = resolve(&root.join("missing.json").into()).unwrap_err();
        assert!(matches!(err, StrataError::PathNotFound { ref path } if path.ends_with("missing.json")));
    }

    #[test]
    fn test_bare_optional_path_is_still_required() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);

        let err = resolve(&PathSpec::optional(root.join("missing.json"))).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_bare_optional_path_strips_marker() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);
        let file = root.join("app.json");
        touch(&file);

        let resolved = resolve(&PathSpec::optional(&file)).unwrap();
        assert_eq!(resolved, vec![file]);
    }

    #[test]
    fn test_resolve_directory_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);
        touch(&root.join("b.yaml"));
        touch(&root.join("a.json"));
        touch(&root.join("README"));
        touch(&root.join(".hidden.json"));
        fs::create_dir(root.join("nested.d")).unwrap();
        touch(&root.join("nested.d").join("deep.json"));

        let resolved = resolve(&PathSpec::from(root.as_path())).unwrap();
        assert_eq!(resolved, vec![root.join("a.json"), root.join("b.yaml")]);
    }

    #[test]
    fn test_resolve_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);
        touch(&root.join("NOTES"));

        let err = resolve(&PathSpec::from(root.as_path())).unwrap_err();
        assert!(matches!(err, StrataError::EmptyDirectory { .. }));
    }

    #[test]
    fn test_resolve_list_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);
        let first = root.join("z.json");
        let second = root.join("a.json");
        touch(&first);
        touch(&second);

        let resolved = resolve(&PathSpec::from(vec![first.clone(), second.clone()])).unwrap();
        assert_eq!(resolved, vec![first, second]);
    }

    #[test]
    fn test_resolve_list_skips_missing_optional() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);
        let present = root.join("present.json");
        touch(&present);

        let spec = PathSpec::List(vec![
            PathSpec::optional(root.join("missing.json")),
            PathSpec::from(present.as_path()),
        ]);
        assert_eq!(resolve(&spec).unwrap(), vec![present]);
    }

    #[test]
    fn test_resolve_list_required_missing_fails() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);
        let present = root.join("present.json");
        touch(&present);

        let spec = PathSpec::from(vec![present, root.join("missing.json")]);
        assert!(resolve(&spec).unwrap_err().is_not_found());
    }

    #[test]
    fn test_optional_empty_directory_still_fails() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);
        let empty = root.join("empty");
        fs::create_dir(&empty).unwrap();

        let spec = PathSpec::List(vec![PathSpec::optional(&empty)]);
        assert!(matches!(resolve(&spec).unwrap_err(), StrataError::EmptyDirectory { .. }));
    }

    #[test]
    fn test_resolve_nested_lists() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);
        let a = root.join("a.json");
        let b = root.join("b.json");
        touch(&a);
        touch(&b);

        let spec = PathSpec::List(vec![
            PathSpec::from(vec![a.clone()]),
            PathSpec::List(vec![PathSpec::optional(root.join("nope.json")), b.clone().into()]),
        ]);
        assert_eq!(resolve(&spec).unwrap(), vec![a, b]);
    }

    #[test]
    fn test_directory_with_glob_characters() {
        let temp_dir = TempDir::new().unwrap();
        let root = utf8_root(&temp_dir);
        let dir = root.join("conf[dev]");
        fs::create_dir(&dir).unwrap();
        touch(&dir.join("app.json"));

        let resolved = resolve(&PathSpec::from(dir.as_path())).unwrap();
        assert_eq!(resolved, vec![dir.join("app.json")]);
    }

    #[test]
    fn test_is_optional() {
        assert!(PathSpec::from("?local.json").is_optional());
        assert!(!PathSpec::from("local.json").is_optional());
        assert!(!PathSpec::from(vec!["?local.json"]).is_optional());
    }
}
