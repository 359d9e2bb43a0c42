mod memory_library_fs;

pub use memory_library_fs::MemoryLibraryFs;
