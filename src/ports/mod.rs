mod library_filesystem;

pub use library_filesystem::LibraryFilesystem;
