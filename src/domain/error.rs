use std::io;

use thiserror::Error;

/// Library-wide error type for library-index operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Index serialization failure.
    #[error("Failed to serialize index: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No folder name was entered.
    #[error("No folder name entered")]
    EmptyFolderName,

    /// Folder name would resolve outside the library directory.
    #[error("Invalid folder name '{0}': must be a relative path inside the library directory")]
    InvalidFolderName(String),

    /// A scanned path does not live under the library root.
    #[error("Path '{path}' is not inside library root '{root}'")]
    OutsideLibrary { path: String, root: String },

    /// A scanned path cannot be represented as UTF-8 text.
    #[error("Path '{0}' is not valid UTF-8")]
    NonUtf8Path(String),

    /// The interactive prompt was interrupted.
    #[error("Folder prompt cancelled")]
    PromptCancelled,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Json(_) | AppError::NonUtf8Path(_) => io::ErrorKind::InvalidData,
            AppError::Configuration(_)
            | AppError::EmptyFolderName
            | AppError::InvalidFolderName(_)
            | AppError::OutsideLibrary { .. } => io::ErrorKind::InvalidInput,
            AppError::PromptCancelled => io::ErrorKind::Interrupted,
        }
    }
}
