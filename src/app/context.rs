use crate::domain::{AllowedExtensions, LibraryLayout};
use crate::ports::LibraryFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: LibraryFilesystem> {
    filesystem: F,
    layout: LibraryLayout,
    allowed: AllowedExtensions,
}

impl<F: LibraryFilesystem> AppContext<F> {
    /// Create a new application context.
    pub fn new(filesystem: F, layout: LibraryLayout, allowed: AllowedExtensions) -> Self {
        Self { filesystem, layout, allowed }
    }

    /// Get a reference to the library filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get the resolved library layout.
    pub fn layout(&self) -> &LibraryLayout {
        &self.layout
    }

    /// Get the extension allow-list.
    pub fn allowed(&self) -> &AllowedExtensions {
        &self.allowed
    }
}
