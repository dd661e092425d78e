//! Collaborators the resolver consults while disambiguating text.
//!
//! Each collaborator is a small `Send + Sync` trait so callers can inject
//! their own answers. Native implementations report what the current
//! platform looks like; fixed implementations return configured values.

use std::path::Path;

/// Reports properties of the filesystem that affect path comparison.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem: Send + Sync {
    /// Whether paths differing only in case name different files.
    fn is_case_sensitive(&self) -> bool;
}

/// Lists the absolute filesystem roots of the platform.
#[cfg_attr(test, mockall::automock)]
pub trait RootEnumerator: Send + Sync {
    /// The roots, in platform order.
    fn list_roots(&self) -> Vec<String>;
}

/// Receives deprecation warnings.
#[cfg_attr(test, mockall::automock)]
pub trait DeprecationSink: Send + Sync {
    /// Report a deprecated usage. The return value is never consulted.
    fn warn(&self, message: &str);
}

/// Case sensitivity as the current platform usually has it.
///
/// macOS and Windows default to case-insensitive filesystems; everything else
/// is treated as case-sensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFileSystem;

impl FileSystem for NativeFileSystem {
    fn is_case_sensitive(&self) -> bool {
        !cfg!(any(target_os = "macos", target_os = "windows"))
    }
}

/// A fixed case-sensitivity answer.
///
/// # Examples
///
/// ```
/// use filenote::notation::{FileSystem, FixedCaseSensitivity};
///
/// assert!(!FixedCaseSensitivity(false).is_case_sensitive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCaseSensitivity(pub bool);

impl FileSystem for FixedCaseSensitivity {
    fn is_case_sensitive(&self) -> bool {
        self.0
    }
}

/// The roots of the running system.
///
/// On Unix this is `/`. On Windows it is every drive root from `A:\` to
/// `Z:\` that currently exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRoots;

impl RootEnumerator for NativeRoots {
    #[cfg(windows)]
    fn list_roots(&self) -> Vec<String> {
        (b'A'..=b'Z')
            .map(|drive| format!("{}:\\", char::from(drive)))
            .filter(|root| Path::new(root).exists())
            .collect()
    }

    #[cfg(not(windows))]
    fn list_roots(&self) -> Vec<String> {
        let root = Path::new("/");
        vec![root.display().to_string()]
    }
}

/// A fixed list of roots.
///
/// # Examples
///
/// ```
/// use filenote::notation::{FixedRoots, RootEnumerator};
///
/// let roots = FixedRoots::new(["/", "/Volumes/data"]);
/// assert_eq!(roots.list_roots(), vec!["/", "/Volumes/data"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FixedRoots(Vec<String>);

impl FixedRoots {
    /// Create from any list of root strings.
    pub fn new<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(roots.into_iter().map(Into::into).collect())
    }
}

impl RootEnumerator for FixedRoots {
    fn list_roots(&self) -> Vec<String> {
        self.0.clone()
    }
}
