//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary home and alias store
//! - Command builder helpers for common patterns
//! - Directory tree fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Navigation variables cleared from every test command.
const STATE_VARS: [&str; 5] = ["r", "rr", "rp", "r1", "r2"];

/// Test environment with an isolated home directory and alias store.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the temporary directory
    pub temp_path: PathBuf,
    /// Path to the alias store file (not created until the first define)
    pub store: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let store = temp_path.join("relocations");

        Self {
            temp_dir,
            temp_path,
            store,
        }
    }

    /// A command with no store flag, isolated from the user's home,
    /// configuration and navigation variables.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("reloc").expect("Failed to find reloc binary");
        cmd.env("HOME", &self.temp_path)
            .env_remove("RELOC_STORE")
            .env_remove("RELOC_CASELESS")
            .env_remove("RELOC_LOG_MODE")
            .env_remove("RELOC_OUTPUT_FORMAT")
            .current_dir(&self.temp_path);
        for var in STATE_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command using this environment's store file.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--store").arg(&self.store);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a directory (and parents) under the temp dir.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Define an alias, asserting success.
    pub fn define(&self, name: &str, path: &Path) {
        self.command()
            .arg("define")
            .arg(name)
            .arg(path)
            .assert()
            .success();
    }

    /// Run `list` and return stdout.
    pub fn list(&self) -> String {
        let output = self
            .command()
            .arg("list")
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Run `query` with `args` and return trimmed stdout, asserting `code`.
    pub fn query(&self, args: &[&str], code: i32) -> String {
        let output = self
            .command()
            .arg("query")
            .args(args)
            .output()
            .expect("Failed to run query command");

        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit for query {args:?}: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }
}

/// A tree rooted at `<temp>/proj` with the given subdirectories, bound to
/// the alias `proj`.
#[allow(dead_code)]
pub fn project_tree(env: &TestEnv, dirs: &[&str]) -> PathBuf {
    let root = env.create_dir("proj");
    for dir in dirs {
        std::fs::create_dir_all(root.join(dir)).expect("Failed to create subdirectory");
    }
    env.define("proj", &root);
    root
}
