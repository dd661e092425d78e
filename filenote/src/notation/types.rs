//! Core types for notation handling.
//!
//! This module defines the closed set of input shapes the resolver accepts.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::notation::uri::Uri;

/// A value that names a filesystem location in one of several forms.
///
/// # Examples
///
/// ```
/// use filenote::Notation;
/// use std::path::PathBuf;
///
/// let path = Notation::from(PathBuf::from("/tmp/out"));
/// let text = Notation::from("file:/tmp/out");
/// let other = Notation::other(&42u16);
///
/// assert_eq!(path.kind(), "path");
/// assert_eq!(text.kind(), "text");
/// assert_eq!(other.kind(), "other");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notation {
    /// A path value, used as is.
    FilePath(PathBuf),

    /// A parsed URI.
    Uri(Uri),

    /// A parsed URL.
    Url(Url),

    /// Arbitrary text that may be a path, a `file:` URI or something else.
    Text(String),

    /// Any other value, known only by its type name and display text.
    Other(OtherNotation),
}

impl Notation {
    /// Wrap an arbitrary displayable value.
    ///
    /// The concrete type name is recorded so that resolving the notation can
    /// report which type fell back to its display text.
    #[must_use]
    pub fn other<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Self::Other(OtherNotation::new(value))
    }

    /// A short name for the variant, for logs and diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FilePath(_) => "path",
            Self::Uri(_) => "uri",
            Self::Url(_) => "url",
            Self::Text(_) => "text",
            Self::Other(_) => "other",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FilePath(path) => write!(f, "{}", path.display()),
            Self::Uri(uri) => write!(f, "{uri}"),
            Self::Url(url) => write!(f, "{url}"),
            Self::Text(text) => f.write_str(text),
            Self::Other(other) => f.write_str(other.text()),
        }
    }
}

impl From<PathBuf> for Notation {
    fn from(path: PathBuf) -> Self {
        Self::FilePath(path)
    }
}

impl From<&Path> for Notation {
    fn from(path: &Path) -> Self {
        Self::FilePath(path.to_path_buf())
    }
}

impl From<Uri> for Notation {
    fn from(uri: Uri) -> Self {
        Self::Uri(uri)
    }
}

impl From<Url> for Notation {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<String> for Notation {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Notation {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<OtherNotation> for Notation {
    fn from(other: OtherNotation) -> Self {
        Self::Other(other)
    }
}

/// A value of some type the resolver has no dedicated handling for.
///
/// # Examples
///
/// ```
/// use filenote::notation::OtherNotation;
///
/// let other = OtherNotation::new(&3.5f64);
/// assert_eq!(other.type_name(), "f64");
/// assert_eq!(other.text(), "3.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OtherNotation {
    type_name: &'static str,
    text: String,
}

impl OtherNotation {
    /// Capture a value's type name and display text.
    #[must_use]
    pub fn new<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            text: value.to_string(),
        }
    }

    /// The concrete type name of the original value.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The display text of the original value.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the notation, returning its display text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        assert!(matches!(
            Notation::from(PathBuf::from("/a")),
            Notation::FilePath(_)
        ));
        assert!(matches!(Notation::from(Path::new("/a")), Notation::FilePath(_)));
        assert!(matches!(Notation::from("a"), Notation::Text(_)));
        assert!(matches!(
            Notation::from(String::from("a")),
            Notation::Text(_)
        ));
        assert!(matches!(
            Notation::from(Uri::parse("file:/a").unwrap()),
            Notation::Uri(_)
        ));
        assert!(matches!(
            Notation::from(Url::parse("http://h/").unwrap()),
            Notation::Url(_)
        ));
    }

    #[test]
    fn test_other_records_type_name() {
        struct Marker;
        impl fmt::Display for Marker {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("marker")
            }
        }

        let other = OtherNotation::new(&Marker);
        assert!(other.type_name().ends_with("Marker"));
        assert_eq!(other.text(), "marker");
        assert_eq!(other.into_text(), "marker");
    }

    #[test]
    fn test_other_unsized() {
        let other = OtherNotation::new("slice");
        assert_eq!(other.type_name(), "str");
    }

    #[test]
    fn test_display() {
        assert_eq!(Notation::from("x/y").to_string(), "x/y");
        assert_eq!(Notation::other(&7u8).to_string(), "7");
        assert_eq!(
            Notation::from(Uri::parse("file:/a%20b").unwrap()).to_string(),
            "file:/a%20b"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(Notation::from(PathBuf::from("/a")).kind(), "path");
        assert_eq!(Notation::from(Uri::parse("file:/a").unwrap()).kind(), "uri");
        assert_eq!(Notation::from(Url::parse("file:///a").unwrap()).kind(), "url");
    }
}
