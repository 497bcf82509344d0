use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{EntryKind, PropertyStore};

/// Filesystem-backed property store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemPropertyStore;

impl FilesystemPropertyStore {
    pub fn new() -> Self {
        Self
    }
}

impl PropertyStore for FilesystemPropertyStore {
    fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
        let metadata = fs::metadata(path).ok()?;
        if metadata.is_dir() { Some(EntryKind::Directory) } else { Some(EntryKind::File) }
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|e| AppError::path_io("read", path, e))
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        let entries = fs::read_dir(dir).map_err(|e| AppError::path_io("list", dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| AppError::path_io("list", dir, e))?;
            let path = entry.path();
            // Follows symlinks, so a link to a regular file counts as one.
            if path.is_file() {
                files.push(path);
            } else {
                debug!(path = %path.display(), "skipping non-regular entry");
            }
        }
        Ok(files)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(|e| AppError::path_io("write", path, e))
    }
}
