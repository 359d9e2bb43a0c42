//! Shared testing utilities for library-index CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project root for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated project root without a library directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the emulated project root.
    pub fn project_root(&self) -> &Path {
        self.root.path()
    }

    /// Path to the library directory under the project root.
    pub fn library_path(&self) -> PathBuf {
        self.project_root().join("library")
    }

    /// Path of the index written for `folder`.
    pub fn index_path(&self, folder: &str) -> PathBuf {
        self.library_path().join(format!("library-{}.json", folder))
    }

    /// Build a command for invoking the compiled `library-index` binary.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("library-index").expect("Failed to locate library-index binary");
        cmd.env("LIBRARY_INDEX_ROOT", self.project_root()).env_remove("RUST_LOG");
        cmd
    }

    /// Create an empty file at `rel` below the library directory.
    pub fn add_asset(&self, rel: &str) -> PathBuf {
        let path = self.library_path().join(rel);
        fs::create_dir_all(path.parent().expect("asset path has a parent"))
            .expect("Failed to create asset directory");
        fs::write(&path, b"").expect("Failed to write asset");
        path
    }

    /// Read and parse the index written for `folder`.
    pub fn read_index(&self, folder: &str) -> Vec<String> {
        let content = fs::read_to_string(self.index_path(folder)).expect("index should exist");
        serde_json::from_str(&content).expect("index should be a JSON array of strings")
    }

    /// Read the raw index text written for `folder`.
    pub fn read_index_text(&self, folder: &str) -> String {
        fs::read_to_string(self.index_path(folder)).expect("index should exist")
    }
}
