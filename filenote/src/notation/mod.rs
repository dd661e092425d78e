//! Notation resolution: turning path-like input into filesystem paths.
//!
//! Build configuration accepts locations in many shapes. This module
//! reduces all of them to a [`PathBuf`](std::path::PathBuf).
//!
//! # Accepted Shapes
//!
//! - **Paths** are returned untouched.
//! - **URIs and URLs** must use the `file` scheme; anything else is rejected.
//! - **Text** is inspected: a `file:` prefix is stripped and percent-decoded,
//!   text that looks like some other URI is rejected, and text that starts
//!   with a filesystem root is taken as a literal path.
//! - **Anything else** is converted from its display text after a
//!   deprecation warning.
//!
//! # Collaborators
//!
//! Text disambiguation consults a [`FileSystem`] for case sensitivity and a
//! [`RootEnumerator`] for the platform roots. Deprecation warnings go to a
//! [`DeprecationSink`]. All three are injected, so resolution can be tested
//! without touching the real platform.
//!
//! # Examples
//!
//! ```
//! use filenote::notation::{FixedCaseSensitivity, FixedRoots, NotationResolver};
//! use std::path::PathBuf;
//!
//! let resolver = NotationResolver::new()
//!     .with_file_system(FixedCaseSensitivity(false))
//!     .with_roots(FixedRoots::new(["/Users"]));
//!
//! assert_eq!(
//!     resolver.resolve("/users/me/project").unwrap(),
//!     PathBuf::from("/users/me/project")
//! );
//! assert!(resolver.resolve("s3:bucket/key").unwrap_err().is_unsupported());
//! ```

pub mod capabilities;
pub mod resolver;
pub mod text;
mod types;
pub mod uri;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use capabilities::{
    DeprecationSink, FileSystem, FixedCaseSensitivity, FixedRoots, NativeFileSystem, NativeRoots,
    RootEnumerator,
};
pub use resolver::NotationResolver;
pub use types::{Notation, OtherNotation};
pub use uri::{Uri, UriSyntaxError};
