//! Common test utilities and harness
//!
//! Provides reusable utilities for functional testing including:
//! - Isolated home/config directories
//! - Running the `unroll` binary and capturing its output

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Test environment with an isolated home directory
pub struct TestEnvironment {
    /// Temporary directory standing in for $HOME
    pub temp_dir: TempDir,
    /// Path to the config directory (~/.config/unroll)
    pub config_dir: PathBuf,
}

impl TestEnvironment {
    /// Create a new isolated test environment
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_dir = temp_dir.path().join(".config").join("unroll");

        Self {
            temp_dir,
            config_dir,
        }
    }

    /// Write a config file at the default location
    pub fn write_config(&self, content: &str) {
        std::fs::create_dir_all(&self.config_dir).expect("Failed to create config directory");
        std::fs::write(self.config_path(), content).expect("Failed to write test config");
    }

    /// Write a config file at an arbitrary name inside the temp directory
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Path a file would have inside the temp directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Default config file path for this environment
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Run the binary with HOME pointed at the temp directory
    pub fn run(&self, args: &[&str]) -> RunResult {
        let output = Command::new(env!("CARGO_BIN_EXE_unroll"))
            .args(args)
            .env("HOME", self.temp_dir.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run unroll");
        RunResult(output)
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

/// Captured process output
pub struct RunResult(pub Output);

impl RunResult {
    pub fn success(&self) -> bool {
        self.0.status.success()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.0.stderr).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.stdout().lines().map(str::to_string).collect()
    }

    /// Assert success and return stdout lines
    pub fn expect_lines(&self) -> Vec<String> {
        assert!(self.success(), "unroll failed: {}", self.stderr());
        self.lines()
    }
}
