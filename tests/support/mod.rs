//! Test support utilities for veil integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]


#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// Child processes run with `.current_dir()` set to the project, so no
/// process-global state is touched and tests can run in parallel.
pub struct Test {
    pub dir: TempDir,
}

impl Test {
    /// Create an empty project.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a project containing both built-in target files.
    pub fn with_targets() -> Self {
        let t = Self::new();
        t.write(COMPOSE_PATH, COMPOSE);
        t.write(SETTINGS_PATH, SETTINGS);
        t
    }

    /// Absolute path of a project-relative file.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write a project file, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(path, content).expect("failed to write file");
    }

    /// Read a project file.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("failed to read file")
    }

    /// Values recorded in the store for a target.
    pub fn stored(&self, target: &str) -> Option<Vec<String>> {
        let contents = fs::read_to_string(self.path(STORE_PATH)).ok()?;
        let store: serde_json::Value = serde_json::from_str(&contents).ok()?;
        serde_json::from_value(store.get(target)?.clone()).ok()
    }
}
