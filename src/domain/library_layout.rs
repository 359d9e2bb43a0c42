//! Library directory layout rooted at the project root.

use std::path::{Path, PathBuf};

use super::{AppError, FileRecord, FolderName};

/// Name of the library directory beneath the project root.
pub const LIBRARY_DIR: &str = "library";

/// Resolved library paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryLayout {
    project_root: PathBuf,
    library_root: PathBuf,
}

impl LibraryLayout {
    pub fn new(project_root: PathBuf) -> Self {
        let library_root = project_root.join(LIBRARY_DIR);
        Self { project_root, library_root }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn library_root(&self) -> &Path {
        &self.library_root
    }

    /// Directory scanned for `folder`.
    pub fn target_dir(&self, folder: &FolderName) -> PathBuf {
        folder.segments().fold(self.library_root.clone(), |acc, segment| acc.join(segment))
    }

    /// Index file written for `folder`, directly inside the library root.
    pub fn output_path(&self, folder: &FolderName) -> PathBuf {
        self.library_root.join(folder.output_file_name())
    }

    /// Normalize a scanned file into its project-relative record.
    pub fn record_for(&self, path: &Path) -> Result<FileRecord, AppError> {
        FileRecord::from_library_path(&self.library_root, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> LibraryLayout {
        LibraryLayout::new(PathBuf::from("/srv/show"))
    }

    #[test]
    fn library_root_is_under_project_root() {
        assert_eq!(layout().library_root(), Path::new("/srv/show/library"));
    }

    #[test]
    fn target_dir_joins_each_segment() {
        let folder = FolderName::new("art/textures").unwrap();
        assert_eq!(layout().target_dir(&folder), Path::new("/srv/show/library/art/textures"));
    }

    #[test]
    fn output_path_lives_in_library_root() {
        let folder = FolderName::new("default_lib").unwrap();
        assert_eq!(
            layout().output_path(&folder),
            Path::new("/srv/show/library/library-default_lib.json")
        );
    }

    #[test]
    fn record_for_round_trips_through_project_root() {
        let layout = layout();
        let file = layout.library_root().join("default_lib").join("intro.mp4");
        let record = layout.record_for(&file).unwrap();
        assert_eq!(record.as_str(), "library/default_lib/intro.mp4");
        assert_eq!(record.resolve(layout.project_root()), file);
    }
}
