use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{EntryKind, PropertyStore};

/// In-memory property store for testing.
#[derive(Default)]
#[allow(dead_code)]
pub struct MockPropertyStore {
    pub files: RefCell<BTreeMap<PathBuf, String>>,
    pub dirs: RefCell<BTreeSet<PathBuf>>,
    pub unreadable: RefCell<BTreeSet<PathBuf>>,
    /// Paths in the order they were written.
    pub writes: RefCell<Vec<PathBuf>>,
    /// Directory listings are returned in reverse name order to catch callers
    /// relying on enumeration order.
    pub reverse_listing: bool,
}

#[allow(dead_code)]
impl MockPropertyStore {
    pub fn new() -> Self {
        Self { reverse_listing: true, ..Self::default() }
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.add_dir(path);
        self
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        self.dirs.borrow_mut().insert(path.into());
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, content: &str) {
        self.files.borrow_mut().insert(path.into(), content.to_string());
    }

    /// Keep the file listed but fail when it is read.
    pub fn make_unreadable(&self, path: impl Into<PathBuf>) {
        self.unreadable.borrow_mut().insert(path.into());
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }
}

impl PropertyStore for MockPropertyStore {
    fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
        if self.dirs.borrow().contains(path) {
            Some(EntryKind::Directory)
        } else if self.files.borrow().contains_key(path) {
            Some(EntryKind::File)
        } else {
            None
        }
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        if self.unreadable.borrow().contains(path) {
            return Err(AppError::path_io(
                "read",
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            AppError::path_io("read", path, io::Error::new(io::ErrorKind::NotFound, "not found"))
        })
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        if !self.dirs.borrow().contains(dir) {
            return Err(AppError::path_io(
                "list",
                dir,
                io::Error::new(io::ErrorKind::NotFound, "not found"),
            ));
        }
        let mut files: Vec<PathBuf> =
            self.files.borrow().keys().filter(|p| p.parent() == Some(dir)).cloned().collect();
        if self.reverse_listing {
            files.reverse();
        }
        Ok(files)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let parent_exists = path.parent().is_some_and(|p| self.dirs.borrow().contains(p));
        if !parent_exists {
            return Err(AppError::path_io(
                "write",
                path,
                io::Error::new(io::ErrorKind::NotFound, "parent directory missing"),
            ));
        }
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        self.writes.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
