//! Port for property object location I/O.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Kind of entry found at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Port for reading inputs from, and writing collections to, a property object location.
pub trait PropertyStore {
    /// Kind of the entry at `path`, or `None` if nothing exists there.
    fn entry_kind(&self, path: &Path) -> Option<EntryKind>;

    /// Read a UTF-8 text file.
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;

    /// List the regular files directly inside `dir`, unordered.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Write a file, replacing any existing content. Parent directories are not created.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    fn path_exists(&self, path: &Path) -> bool {
        self.entry_kind(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.entry_kind(path) == Some(EntryKind::Directory)
    }
}

impl<T: PropertyStore + ?Sized> PropertyStore for &T {
    fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
        (**self).entry_kind(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        (**self).read_to_string(path)
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        (**self).list_files(dir)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        (**self).write_file(path, content)
    }
}
