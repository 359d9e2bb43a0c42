use std::fmt;
use std::path::{Component, Path, is_separator};

use super::AppError;

/// A validated folder name relative to the library root.
///
/// Guarantees:
/// - Not blank once the trailing line terminator is removed
/// - Relative, with only normal components (no `..`, `.`, root or drive prefix)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderName(String);

impl FolderName {
    pub fn new(input: &str) -> Result<Self, AppError> {
        let name = input.trim_end_matches(['\r', '\n']);
        if name.trim().is_empty() {
            return Err(AppError::EmptyFolderName);
        }

        let path = Path::new(name);
        let only_normal = path.components().all(|c| matches!(c, Component::Normal(_)));
        // `Path::components` drops interior `.` segments, so check the raw text too.
        let has_dot_segment =
            name.split(is_separator).any(|segment| segment == "." || segment == "..");
        if path.is_absolute() || !only_normal || has_dot_segment || name.starts_with(is_separator) {
            return Err(AppError::InvalidFolderName(name.to_string()));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments of the name, split on the host's separators.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        Path::new(&self.0).components().filter_map(|component| match component {
            Component::Normal(segment) => segment.to_str(),
            _ => None,
        })
    }

    /// File name of the index written for this folder.
    pub fn output_file_name(&self) -> String {
        format!("library-{}.json", self.segments().collect::<Vec<_>>().join("-"))
    }
}

impl fmt::Display for FolderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
