//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::DiskLibraryFilesystem;
use crate::app::{AppContext, commands::index as index_command, config};
use crate::domain::{AllowedExtensions, FolderName, LibraryLayout};

pub use crate::app::commands::index::{IndexOutcome, IndexSummary};
pub use crate::domain::{AppError, AssetKind, FileRecord};

/// Create an `AppContext` for a given project root.
fn create_context(project_root: PathBuf) -> AppContext<DiskLibraryFilesystem> {
    AppContext::new(
        DiskLibraryFilesystem::new(),
        LibraryLayout::new(project_root),
        AllowedExtensions::media(),
    )
}

/// Index `library/<folder>` under the configured project root.
pub fn index(folder: &str) -> Result<IndexOutcome, AppError> {
    index_at(config::resolve_project_root()?, folder)
}

/// Index `library/<folder>` under the specified project root.
pub fn index_at(project_root: impl Into<PathBuf>, folder: &str) -> Result<IndexOutcome, AppError> {
    let folder = FolderName::new(folder)?;
    let ctx = create_context(project_root.into());
    index_command::execute(&ctx, &folder)
}
