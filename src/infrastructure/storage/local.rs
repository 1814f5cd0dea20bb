//! Local Storage Implementation
//!
//! Implements the Storage port for a directory on local disk.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::domain::ports::{Storage, StorageError, StorageLock, StorageResult};

/// Directory-backed storage
///
/// Provides atomic writes (tempfile + rename) and `fs2` advisory locks.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a storage path below the root, refusing anything that escapes it
    pub fn full_path(&self, path: &str) -> StorageResult<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || path.is_empty() {
            return Err(StorageError::Other {
                path: path.to_string(),
                message: format!("path escapes storage root '{}'", self.root.display()),
            });
        }
        Ok(self.root.join(relative))
    }

    fn ensure_parent(&self, path: &str, full: &Path) -> StorageResult<()> {
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::from_io(path, e))?;
        }
        Ok(())
    }
}

/// Holds the lock file; the lock is released when dropped
struct LockGuard(File);

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.0);
    }
}

impl Storage for LocalStorage {
    fn exists(&self, path: &str) -> bool {
        self.full_path(path).map(|p| p.is_file()).unwrap_or(false)
    }

    fn read(&self, path: &str) -> StorageResult<Vec<u8>> {
        let full = self.full_path(path)?;
        fs::read(&full).map_err(|e| StorageError::from_io(path, e))
    }

    fn write(&self, path: &str, content: &[u8]) -> StorageResult<()> {
        let full = self.full_path(path)?;
        self.ensure_parent(path, &full)?;
        let dir = full.parent().unwrap_or(self.root.as_path());

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StorageError::from_io(path, e))?;
        tmp.write_all(content)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| StorageError::from_io(path, e))?;
        tmp.persist(&full)
            .map_err(|e| StorageError::from_io(path, e.error))?;
        Ok(())
    }

    fn delete(&self, path: &str) -> StorageResult<()> {
        let full = self.full_path(path)?;
        fs::remove_file(&full).map_err(|e| StorageError::from_io(path, e))
    }

    fn rename(&self, from: &str, to: &str) -> StorageResult<()> {
        let source = self.full_path(from)?;
        let target = self.full_path(to)?;
        self.ensure_parent(to, &target)?;
        fs::rename(&source, &target).map_err(|e| StorageError::from_io(from, e))
    }

    fn lock(&self, path: &str) -> StorageResult<StorageLock> {
        let full = self.full_path(path)?;
        self.ensure_parent(path, &full)?;
        let file = File::create(&full).map_err(|e| StorageError::from_io(path, e))?;
        file.lock_exclusive()
            .map_err(|e| StorageError::from_io(path, e))?;
        Ok(StorageLock::held(LockGuard(file)))
    }
}
