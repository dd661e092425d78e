//! Notation resolution.
//!
//! This module provides the `NotationResolver` type, which turns any
//! [`Notation`] into a [`PathBuf`].

use std::borrow::Cow;
use std::fmt;
use std::path::{PathBuf, MAIN_SEPARATOR};
use std::sync::Arc;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::Logger;
use crate::notation::capabilities::{
    DeprecationSink, FileSystem, FixedCaseSensitivity, FixedRoots, NativeFileSystem, NativeRoots,
    RootEnumerator,
};
use crate::notation::text::{decode_escapes, looks_like_uri, FILE_PREFIX};
use crate::notation::types::Notation;
use crate::notation::uri::Uri;

const FILE_SCHEME: &str = "file";

/// Resolves notations into filesystem paths.
///
/// Resolution is a pure function of the notation and the three injected
/// collaborators. The resolver holds no mutable state and can be shared
/// between threads.
///
/// # Examples
///
/// ```
/// use filenote::NotationResolver;
/// use std::path::PathBuf;
///
/// let resolver = NotationResolver::new();
///
/// let path = resolver.resolve("file:/tmp/my%20file.txt").unwrap();
/// assert_eq!(path, PathBuf::from("/tmp/my file.txt"));
///
/// let err = resolver.resolve("http://example.com/file.txt").unwrap_err();
/// assert!(err.is_unsupported());
/// ```
#[derive(Clone)]
pub struct NotationResolver {
    file_system: Arc<dyn FileSystem>,
    roots: Arc<dyn RootEnumerator>,
    deprecations: Arc<dyn DeprecationSink>,
}

impl Default for NotationResolver {
    fn default() -> Self {
        Self {
            file_system: Arc::new(NativeFileSystem),
            roots: Arc::new(NativeRoots),
            deprecations: Arc::new(Logger::default()),
        }
    }
}

impl fmt::Debug for NotationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotationResolver").finish_non_exhaustive()
    }
}

impl NotationResolver {
    /// Create a resolver backed by the native platform and a stderr logger.
    ///
    /// # Examples
    ///
    /// ```
    /// use filenote::NotationResolver;
    ///
    /// let resolver = NotationResolver::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver that honors configuration overrides.
    ///
    /// `case_sensitive` and `roots` replace the native answers when set.
    /// The deprecation sink is a logger at the configured log mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use filenote::{Config, NotationResolver};
    /// use std::path::PathBuf;
    ///
    /// let config = Config {
    ///     case_sensitive: Some(false),
    ///     roots: Some(vec!["/Users".to_string()]),
    ///     ..Default::default()
    /// };
    /// let resolver = NotationResolver::from_config(&config);
    /// let path = resolver.resolve("/USERS/me").unwrap();
    /// assert_eq!(path, PathBuf::from("/USERS/me"));
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut resolver = Self::new().with_deprecation_sink(Logger::new(config.log_level()));
        if let Some(case_sensitive) = config.case_sensitive {
            resolver = resolver.with_file_system(FixedCaseSensitivity(case_sensitive));
        }
        if let Some(roots) = &config.roots {
            resolver = resolver.with_roots(FixedRoots::new(roots.iter().cloned()));
        }
        resolver
    }

    /// Replace the case-sensitivity oracle.
    #[must_use]
    pub fn with_file_system(mut self, file_system: impl FileSystem + 'static) -> Self {
        self.file_system = Arc::new(file_system);
        self
    }

    /// Replace the root enumerator.
    ///
    /// # Examples
    ///
    /// ```
    /// use filenote::NotationResolver;
    /// use filenote::notation::FixedRoots;
    ///
    /// let resolver = NotationResolver::new()
    ///     .with_roots(FixedRoots::new(["/", "/mnt/build"]));
    /// ```
    #[must_use]
    pub fn with_roots(mut self, roots: impl RootEnumerator + 'static) -> Self {
        self.roots = Arc::new(roots);
        self
    }

    /// Replace the deprecation sink.
    #[must_use]
    pub fn with_deprecation_sink(mut self, sink: impl DeprecationSink + 'static) -> Self {
        self.deprecations = Arc::new(sink);
        self
    }

    /// Append the supported input formats to `candidate_formats`.
    ///
    /// # Examples
    ///
    /// ```
    /// use filenote::NotationResolver;
    ///
    /// let mut formats = Vec::new();
    /// NotationResolver::new().describe(&mut formats);
    /// assert_eq!(formats, vec!["Path, URI, URL or string is supported"]);
    /// ```
    #[allow(clippy::unused_self)]
    pub fn describe(&self, candidate_formats: &mut Vec<String>) {
        candidate_formats.push("Path, URI, URL or string is supported".to_string());
    }

    /// Resolve a notation into a path.
    ///
    /// - A path is returned unchanged.
    /// - A URL is converted to a URI, then handled as one.
    /// - A URI with scheme `file` yields its decoded path.
    /// - Text starting with `file:` yields the rest, percent-decoded.
    /// - Other text shaped like a URI is rejected.
    /// - Text starting with a filesystem root is returned unchanged.
    /// - Anything else emits a deprecation warning naming the value's type
    ///   and is converted from its display text.
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` if a URL is not a valid URI, and
    /// `UnsupportedNotation` for a URI or URI-shaped text whose scheme is
    /// not `file`.
    pub fn resolve(&self, notation: impl Into<Notation>) -> Result<PathBuf> {
        let notation = notation.into();
        log::debug!("Resolving {} notation: {notation}", notation.kind());

        match notation {
            Notation::FilePath(path) => Ok(path),
            Notation::Url(url) => {
                let uri = Uri::try_from(&url).map_err(|source| Error::MalformedInput {
                    input: url.to_string(),
                    source,
                })?;
                Self::resolve_uri(&uri)
            }
            Notation::Uri(uri) => Self::resolve_uri(&uri),
            Notation::Text(text) => self.resolve_text(text),
            Notation::Other(other) => {
                Ok(self.resolve_leniently(other.type_name(), other.into_text()))
            }
        }
    }

    fn resolve_uri(uri: &Uri) -> Result<PathBuf> {
        if uri.scheme() == Some(FILE_SCHEME) {
            return Ok(PathBuf::from(uri.path().into_owned()));
        }
        Err(Error::UnsupportedNotation {
            notation: uri.to_string(),
            message: format!("Unable to convert URI {uri} to a file"),
        })
    }

    fn resolve_text(&self, text: String) -> Result<PathBuf> {
        if let Some(encoded) = text.strip_prefix(FILE_PREFIX) {
            return Ok(PathBuf::from(decode_escapes(encoded).into_owned()));
        }

        // The scheme check runs before root matching, so a drive path like
        // `C:\dir` is rejected here and never reaches the roots. Existing
        // callers depend on this order.
        if looks_like_uri(&text) {
            let message = format!("Cannot convert URL '{text}' to a file.");
            return Err(Error::UnsupportedNotation {
                notation: text,
                message,
            });
        }

        if self.starts_with_root(&text) {
            return Ok(PathBuf::from(text));
        }

        Ok(self.resolve_leniently(std::any::type_name::<String>(), text))
    }

    fn starts_with_root(&self, text: &str) -> bool {
        let case_sensitive = self.file_system.is_case_sensitive();
        let fold = |s: &str| -> String {
            if case_sensitive {
                s.to_string()
            } else {
                s.to_lowercase()
            }
        };
        let candidate: Cow<'_, str> = if case_sensitive {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(text.to_lowercase())
        };

        self.roots
            .list_roots()
            .iter()
            .filter(|root| !root.is_empty())
            .any(|root| {
                let root = fold(root);
                let matched = candidate.starts_with(&root)
                    || candidate.starts_with(&root.replace(MAIN_SEPARATOR, "/"));
                if matched {
                    log::debug!("Text '{text}' starts with root '{root}'");
                }
                matched
            })
    }

    fn resolve_leniently(&self, type_name: &str, text: String) -> PathBuf {
        self.deprecations.warn(&format!(
            "Converting {type_name} to a path using its display text. This has been \
             deprecated and will be removed in a future version. Please use a path, \
             string, URL, or URI instead."
        ));
        PathBuf::from(text)
    }
}
