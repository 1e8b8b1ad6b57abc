//! The few filesystem calls script discovery needs, behind a trait so the
//! loader can run against an in-memory tree in tests.

use std::path::{Path, PathBuf};

pub trait FileSystem {
    /// Contents of the script at `path`.
    ///
    /// # Errors
    /// Any I/O error from reading the file.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Whether a script exists at `path`; used to look for the local script.
    fn exists(&self, path: &Path) -> bool;

    /// Directory searched for the local script when no path is given.
    ///
    /// # Errors
    /// Any I/O error from querying the process working directory.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

/// Reads from the real disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}
