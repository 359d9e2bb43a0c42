pub mod error;
pub mod extensions;
pub mod file_record;
pub mod folder_name;
pub mod library_layout;

pub use error::AppError;
pub use extensions::{AllowedExtensions, AssetKind};
pub use file_record::FileRecord;
pub use folder_name::FolderName;
pub use library_layout::{LIBRARY_DIR, LibraryLayout};
