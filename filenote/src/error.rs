//! Error types for the filenote library.
//!
//! This module provides the error hierarchy for notation resolution and
//! configuration loading, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::notation::uri::UriSyntaxError;

/// Result type alias for operations that may fail with a filenote error.
///
/// # Examples
///
/// ```
/// use filenote::{Error, Result};
/// use std::path::PathBuf;
///
/// fn example_operation() -> Result<PathBuf> {
///     Ok(PathBuf::from("/tmp"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the filenote library.
#[derive(Debug, Error)]
pub enum Error {
    /// A URL could not be expressed as a valid URI.
    #[error("malformed notation '{input}': {source}")]
    MalformedInput {
        /// The string form of the offending value.
        input: String,
        /// The underlying syntax error.
        #[source]
        source: UriSyntaxError,
    },

    /// A URI, or a string shaped like one, does not use the `file` scheme.
    #[error("{message}")]
    UnsupportedNotation {
        /// The string form of the offending value.
        notation: String,
        /// A description of why the notation was rejected.
        message: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error rejects a notation as not denoting a local file.
    ///
    /// # Examples
    ///
    /// ```
    /// use filenote::Error;
    ///
    /// let err = Error::UnsupportedNotation {
    ///     notation: "http://example.com".to_string(),
    ///     message: "Unable to convert URI http://example.com to a file".to_string(),
    /// };
    /// assert!(err.is_unsupported());
    /// ```
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedNotation { .. })
    }

    /// Check if error reports a notation that could not be parsed.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }

    /// The string form of the notation this error is about, if any.
    #[must_use]
    pub fn notation(&self) -> Option<&str> {
        match self {
            Self::MalformedInput { input, .. } => Some(input),
            Self::UnsupportedNotation { notation, .. } => Some(notation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_notation_error() {
        let err = Error::UnsupportedNotation {
            notation: "ftp://host/file".to_string(),
            message: "Unable to convert URI ftp://host/file to a file".to_string(),
        };
        let display = format!("{err}");
        assert_eq!(display, "Unable to convert URI ftp://host/file to a file");
        assert!(err.is_unsupported());
        assert!(!err.is_malformed());
        assert_eq!(err.notation(), Some("ftp://host/file"));
    }

    #[test]
    fn test_malformed_input_error() {
        let source = "file:///a|b".parse::<crate::Uri>().unwrap_err();
        let err = Error::MalformedInput {
            input: "file:///a|b".to_string(),
            source,
        };
        let display = format!("{err}");
        assert!(display.contains("malformed notation"));
        assert!(display.contains("file:///a|b"));
        assert!(err.is_malformed());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/path"),
            reason: "does not exist".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/invalid/path"));
        assert!(display.contains("does not exist"));
        assert_eq!(err.notation(), None);
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "roots".to_string(),
            message: "must not be empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("roots"));
        assert!(display.contains("must not be empty"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<PathBuf> {
            Err(Error::Validation {
                field: "test".to_string(),
                message: "test".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
