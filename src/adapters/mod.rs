pub mod filesystem;

pub use filesystem::DiskLibraryFilesystem;
