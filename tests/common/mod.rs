//! Common test utilities for Harukit integration tests.
//!
//! Consolidates frequently used fixtures so individual test files stay
//! focused on behavior.

// Not every helper is used by every test file
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway project directory for driving the CLI.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create an empty project directory (no manifest, no config).
    pub fn empty() -> Self {
        Self { dir: TempDir::new().expect("failed to create temp dir") }
    }

    /// Create a project with a React `package.json`.
    pub fn with_manifest() -> Self {
        let project = Self::empty();
        project.write(
            "package.json",
            r#"{"name": "fixture", "dependencies": {"react": "18.0.0"}}"#,
        );
        project
    }

    /// Create a project with a manifest and a default `harukit.json`.
    pub fn initialized() -> Self {
        let project = Self::with_manifest();
        project.write("harukit.json", "{}");
        project
    }

    /// Project root path.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parents.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        std::fs::write(path, content).expect("failed to write fixture file");
    }

    /// Read a file relative to the project root.
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(relative))
            .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
    }

    /// Whether a file exists relative to the project root.
    pub fn exists(&self, relative: &str) -> bool {
        self.dir.path().join(relative).exists()
    }

    /// Parsed `harukit.json`.
    pub fn config_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read("harukit.json")).expect("invalid harukit.json")
    }

    /// Build a `harukit` command running inside this project.
    ///
    /// Progress output is disabled and package-manager detection env vars
    /// are scrubbed so the host environment can't leak into assertions.
    pub fn harukit(&self) -> Command {
        let mut cmd = Command::cargo_bin("harukit").expect("harukit binary not built");
        cmd.current_dir(self.dir.path());
        cmd.env("HARUKIT_NO_PROGRESS", "1");
        cmd.env_remove("npm_execpath");
        cmd.env_remove("npm_config_user_agent");
        cmd
    }
}

/// Path of a component file under the default alias layout.
pub fn component_path(name: &str) -> PathBuf {
    PathBuf::from("src/components").join(format!("{name}.tsx"))
}
