#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # filenote
//!
//! A library for converting loosely-typed path notations into filesystem
//! paths.
//!
//! Build scripts and plugin configuration name files in many ways: as paths,
//! as `file:` URIs or URLs, as plain strings, or as arbitrary objects whose
//! display text happens to be a path. This library accepts all of them and
//! produces a [`PathBuf`](std::path::PathBuf), rejecting notations that
//! clearly name something other than a local file.
//!
//! ## Core Types
//!
//! - [`Notation`] and [`OtherNotation`]: The accepted input shapes
//! - [`NotationResolver`]: Converts a notation into a path
//! - [`Uri`]: A strictly parsed URI reference
//! - [`Config`] and [`ConfigBuilder`]: Platform overrides
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use filenote::{NotationResolver, Uri};
//! use std::path::PathBuf;
//!
//! let resolver = NotationResolver::new();
//!
//! // Text with a file: prefix is decoded
//! assert_eq!(
//!     resolver.resolve("file:/tmp/my%20file.txt").unwrap(),
//!     PathBuf::from("/tmp/my file.txt")
//! );
//!
//! // Other schemes are rejected
//! let uri: Uri = "http://example.com/a".parse().unwrap();
//! assert!(resolver.resolve(uri).unwrap_err().is_unsupported());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod notation;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use notation::{Notation, NotationResolver, OtherNotation, Uri, UriSyntaxError};
