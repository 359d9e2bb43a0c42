use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use super::{AppError, LIBRARY_DIR};

/// One indexed asset path, relative to the project root.
///
/// Always `library/<path below the library root>` joined with `/`, whatever the
/// host separator is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FileRecord(String);

impl FileRecord {
    /// Normalize an absolute path found under `library_root`.
    pub fn from_library_path(library_root: &Path, path: &Path) -> Result<Self, AppError> {
        let relative = path.strip_prefix(library_root).map_err(|_| AppError::OutsideLibrary {
            path: path.display().to_string(),
            root: library_root.display().to_string(),
        })?;

        let mut record = String::from(LIBRARY_DIR);
        for component in relative.components() {
            match component {
                Component::Normal(segment) => {
                    let segment = segment
                        .to_str()
                        .ok_or_else(|| AppError::NonUtf8Path(path.display().to_string()))?;
                    record.push('/');
                    record.push_str(segment);
                }
                Component::CurDir => {}
                _ => {
                    return Err(AppError::OutsideLibrary {
                        path: path.display().to_string(),
                        root: library_root.display().to_string(),
                    });
                }
            }
        }

        Ok(Self(record))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Re-join the record with the project root it was recorded against.
    pub fn resolve(&self, project_root: &Path) -> PathBuf {
        self.0.split('/').fold(project_root.to_path_buf(), |acc, segment| acc.join(segment))
    }
}

impl fmt::Display for FileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
