//! Disk-backed implementation of the `LibraryFilesystem` port.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::AppError;
use crate::ports::LibraryFilesystem;

/// Library filesystem backed by the local disk.
///
/// Directory entries are visited in file-name order so repeated runs over the
/// same tree produce the same index.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskLibraryFilesystem;

impl DiskLibraryFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl LibraryFilesystem for DiskLibraryFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path).map_err(AppError::from)
    }

    fn walk_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping unreadable entry during scan");
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }
            // Directory symlinks are not descended into and are not files either.
            if entry.path_is_symlink() && entry.path().is_dir() {
                continue;
            }

            files.push(entry.into_path());
        }

        files
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(AppError::from)
    }
}
