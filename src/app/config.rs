//! Project root resolution.
//!
//! The library lives next to the program: `<project-root>/library/`. The project
//! root is the directory holding the running executable unless
//! `LIBRARY_INDEX_ROOT` points somewhere else.

use std::env;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use crate::domain::AppError;

/// Environment variable overriding the project root.
pub const ROOT_ENV_VAR: &str = "LIBRARY_INDEX_ROOT";

/// Resolve the project root from the environment and the executable location.
pub fn resolve_project_root() -> Result<PathBuf, AppError> {
    project_root_from(env::var_os(ROOT_ENV_VAR), env::current_exe)
}

pub(crate) fn project_root_from<E>(
    override_root: Option<OsString>,
    current_exe: E,
) -> Result<PathBuf, AppError>
where
    E: FnOnce() -> io::Result<PathBuf>,
{
    if let Some(root) = override_root.filter(|value| !value.is_empty()) {
        let root = PathBuf::from(root);
        if root.is_absolute() {
            return Ok(root);
        }
        return Ok(env::current_dir()?.join(root));
    }

    let exe = current_exe().map_err(|e| {
        AppError::config_error(format!("Failed to locate the running executable: {e}"))
    })?;
    exe.parent().map(PathBuf::from).ok_or_else(|| {
        AppError::config_error(format!("Executable path has no parent: {}", exe.display()))
    })
}
