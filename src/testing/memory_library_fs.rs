//! Test double for `LibraryFilesystem`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::LibraryFilesystem;

/// In-memory implementation of `LibraryFilesystem` for unit tests.
///
/// Files are walked in path order. Clones share the same backing store, so a
/// test can keep a handle and inspect what production code wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryLibraryFs {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
    read_only: bool,
}

impl MemoryLibraryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes and directory creation always fail.
    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }

    /// Seed an empty file.
    pub fn add(&self, path: impl Into<PathBuf>) {
        self.files.lock().unwrap().insert(path.into(), String::new());
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }

    fn denied(path: &Path) -> AppError {
        AppError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            format!("read-only mock filesystem: {}", path.display()),
        ))
    }
}

impl LibraryFilesystem for MemoryLibraryFs {
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        if self.read_only {
            return Err(Self::denied(path));
        }
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn walk_files(&self, root: &Path) -> Vec<PathBuf> {
        self.files
            .lock()
            .unwrap()
            .keys()
            .filter(|path| path.starts_with(root) && path.as_path() != root)
            .cloned()
            .collect()
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.read_only {
            return Err(Self::denied(path));
        }
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
