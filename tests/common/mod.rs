//! Common test utilities for envexpand integration tests

// Not every helper is used by every test file
#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use envexpand::config::CONFIG_ENV_VAR;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated working directory and home for running the binary.
///
/// The home directory points into the temp dir so a user's own
/// `~/.envexpand/config.toml` never leaks into a test.
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp dir")?;
        Ok(Self {
            temp_dir,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `name` inside the environment and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Write the default config file under the isolated home directory.
    pub fn write_default_config(&self, content: &str) -> Result<PathBuf> {
        self.write_file(".envexpand/config.toml", content)
    }

    /// An `envexpand` command running inside the environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("envexpand").unwrap();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove(CONFIG_ENV_VAR)
            .env_remove("RUST_LOG");
        cmd
    }
}
