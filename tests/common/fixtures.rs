//! Test fixtures for driving the page-navigator binary
//!
//! Provides helpers for running commands against an isolated config
//! directory so tests never touch (or depend on) the user's real
//! configuration.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A page-navigator command wired to a throwaway config directory
pub struct TestCommand {
    pub cmd: Command,
    // Held so the directory outlives the command run.
    config_dir: TempDir,
}

/// Create a command with config isolated to a temp directory
pub fn page_navigator() -> anyhow::Result<TestCommand> {
    let config_dir = TempDir::new()?;
    let mut cmd = Command::cargo_bin("page-navigator")?;
    cmd.env("XDG_CONFIG_HOME", config_dir.path());
    Ok(TestCommand { cmd, config_dir })
}

impl TestCommand {
    /// Path of the isolated config root
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().to_path_buf()
    }
}

/// Write a label translation file and return its path
pub fn write_labels_file(dir: &TempDir, content: &str) -> anyhow::Result<PathBuf> {
    let path = dir.path().join("labels.json");
    let mut file = std::fs::File::create(&path)?;
    write!(file, "{content}")?;
    Ok(path)
}
