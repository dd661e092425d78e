//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with an isolated home and working directory

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the CLI reads.
const FILENOTE_ENV: [&str; 3] = [
    "FILENOTE_CASE_SENSITIVE",
    "FILENOTE_ROOTS",
    "FILENOTE_LOG_MODE",
];

/// Test environment with isolated home and working directories.
///
/// Commands run with `HOME` pointing into the temporary directory, so no
/// user configuration leaks into a test, and with all FILENOTE_* variables
/// cleared.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Working directory for commands
    pub work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let work_dir = temp_path.join("work");
        std::fs::create_dir_all(temp_path.join("home")).expect("Failed to create home");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work dir");

        Self {
            temp_dir,
            temp_path,
            work_dir,
        }
    }

    /// Get a command builder for the filenote binary.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("filenote").expect("Failed to find filenote binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.temp_path.join("home"));
        for key in FILENOTE_ENV {
            cmd.env_remove(key);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the temp directory and return its path.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Run `resolve` with the given arguments and return trimmed stdout.
    pub fn resolve(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .arg("resolve")
            .args(args)
            .output()
            .expect("Failed to run filenote");
        assert!(
            output.status.success(),
            "resolve failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8")
            .trim()
            .to_string()
    }
}
