//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the filenote library.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use filenote::notation::{DeprecationSink, FixedCaseSensitivity, FixedRoots};
use filenote::NotationResolver;

/// A deprecation sink that records every warning it receives.
///
/// Clones share the same record, so a test can keep one handle and give
/// another to the resolver.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    messages: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl RecordingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All warnings received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Number of warnings received so far.
    pub fn count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl DeprecationSink for RecordingSink {
    fn warn(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Builder for resolvers with fixed platform answers.
///
/// # Examples
///
/// ```no_run
/// # use common::ResolverFixture;
/// let (resolver, sink) = ResolverFixture::new()
///     .case_insensitive()
///     .with_roots(&["/Users"])
///     .build();
/// ```
#[allow(dead_code)]
pub struct ResolverFixture {
    case_sensitive: bool,
    roots: Vec<String>,
}

#[allow(dead_code)]
impl ResolverFixture {
    /// Creates a case-sensitive fixture with `/` as the only root.
    pub fn new() -> Self {
        Self {
            case_sensitive: true,
            roots: vec!["/".to_string()],
        }
    }

    /// Treat the filesystem as case-insensitive.
    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }

    /// Replace the root list.
    pub fn with_roots(mut self, roots: &[&str]) -> Self {
        self.roots = roots.iter().map(ToString::to_string).collect();
        self
    }

    /// Builds the resolver and returns it with a handle on its sink.
    pub fn build(self) -> (NotationResolver, RecordingSink) {
        let sink = RecordingSink::new();
        let resolver = NotationResolver::new()
            .with_file_system(FixedCaseSensitivity(self.case_sensitive))
            .with_roots(FixedRoots::new(self.roots))
            .with_deprecation_sink(sink.clone());
        (resolver, sink)
    }
}

/// Writes `content` to `dir/filename` and returns the path.
#[allow(dead_code)]
pub fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}
