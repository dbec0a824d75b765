//! Error types and result aliases for Strata operations.
//!
//! Provides a unified error type that covers every way a configuration load
//! can fail, with actionable error messages.

use thiserror::Error;

/// Unified error type for all Strata operations
#[derive(Error, Debug)]
pub enum StrataError {
    // Resolution errors
    #[error("Configuration file '{path}' cannot be found")]
    PathNotFound { path: String },

    #[error("Configuration directory '{path}' is empty")]
    EmptyDirectory { path: String },

    #[error("Configuration path '{path}' is invalid: {reason}")]
    InvalidPath { path: String, reason: String },

    // Dispatch errors
    #[error("Unsupported configuration format '{extension}'")]
    UnsupportedFormat { extension: String },

    // Parse errors
    #[error("Failed to parse {format} file {path}: {message}")]
    Parse {
        format: String,
        path: String,
        message: String,
    },

    // Access errors
    #[error("Configuration key '{key}' is not set")]
    KeyNotFound { key: String },

    #[error("Configuration key '{key}' cannot be read as the requested type: {message}")]
    Conversion { key: String, message: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for Strata operations
pub type StrataResult<T> = Result<T, StrataError>;

impl StrataError {
    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Create a parse error for a file of the given format
    pub fn parse(format: impl Into<String>, path: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            format: format.into(),
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Whether this error reports a missing path.
    ///
    /// Optional list entries are skipped on exactly this kind and no other.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StrataError::PathNotFound { .. })
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            StrataError::PathNotFound { .. } => {
                Some("Check the path spelling, or prefix it with '?' to make it optional")
            },
            StrataError::EmptyDirectory { .. } => {
                Some("Add at least one file with an extension to the directory")
            },
            StrataError::UnsupportedFormat { .. } => {
                Some("Run 'strata formats' to list the supported file extensions")
            },
            StrataError::Parse { .. } => Some("Fix the syntax error in the file and try again"),
            StrataError::KeyNotFound { .. } => {
                Some("Use dotted paths for nested keys, e.g. 'database.host' or 'servers.0'")
            },
            _ => None,
        }
    }
}
