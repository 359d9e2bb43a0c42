//! Filesystem operations needed to index a library folder.
//!
//! This port keeps the scan and write steps independent of the real disk so the
//! indexing core can run against an in-memory tree in tests.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for the library index's filesystem access.
///
/// All `path` arguments are absolute.
pub trait LibraryFilesystem {
    /// Create a directory and all parent directories. No-op if it already exists.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Recursively list files below `root`, in traversal order.
    ///
    /// Symlinks to files (broken ones included) are listed; symlinked
    /// directories are neither listed nor descended into.
    ///
    /// Walking is permissive: a missing root or unreadable entries produce fewer
    /// results, never an error.
    fn walk_files(&self, root: &Path) -> Vec<PathBuf>;

    /// Create or truncate `path` and write `content` to it.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
