//! Path utilities for configuration file names.
//!
//! Provides extension detection and optional-path marker handling.

use std::path::Path;

/// Leading character that marks a list entry as optional
pub const OPTIONAL_MARKER: char = '?';

/// Trailing name component that is skipped during extension detection
const DIST_SUFFIX: &str = "dist";

/// Split an optional marker off a path string.
///
/// Returns whether the marker was present and the remaining path. Repeated
/// markers are all stripped.
pub fn split_optional(raw: &str) -> (bool, &str) {
    let stripped = raw.trim_start_matches(OPTIONAL_MARKER);
    (stripped.len() != raw.len(), stripped)
}

/// Get the configuration extension of a file, in its original case.
///
/// The file name is split on `.` and the last component is used, unless that
/// component is `dist`, in which case the one before it is used instead, so
/// `app.json.dist` yields `json`. A name without any dot yields the whole
/// name; `None` is returned only when nothing is left. Case is left to the
/// parser registry, which matches extensions case-insensitively.
pub fn config_extension(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let mut parts: Vec<&str> = name.split('.').collect();

    let mut extension = parts.pop()?;
    if extension == DIST_SUFFIX {
        extension = parts.pop()?;
    }

    Some(extension.to_string())
}
