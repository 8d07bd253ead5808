//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A working directory plus the environment the binary requires.
///
/// The MongoDB URI points at a closed local port so any test that reaches the
/// store fails fast (3s server-selection timeout) instead of touching a real
/// database; tests asserting store-free behavior never get that far.
pub struct TestFixture {
    temp_dir: TempDir,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn dir(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Binary with full required configuration.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("lrsctl").expect("binary builds");
        cmd.current_dir(self.temp_dir.path())
            .env("MONGODB_URI", "mongodb://127.0.0.1:1")
            .env("MONGODB_DB", "lrs_test")
            .env("LRS_COLLECTION", "statements");
        cmd
    }

    /// Binary with one required variable removed.
    pub fn cmd_without(&self, var: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.env_remove(var);
        cmd
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}
