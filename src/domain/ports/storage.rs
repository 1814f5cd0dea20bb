//! Storage port - abstraction over the file-storage backend
//!
//! Paths are `/`-separated and relative to the storage root
//! (`CACHE/js/f5e179b8eca4.js`). Implementations:
//! - `LocalStorage` - a directory on disk
//! - `MemoryStorage` - in-process map for tests and embedding

use std::any::Any;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage operation errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("file not found: {path}")]
    NotFound { path: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage error on {path}: {message}")]
    Other { path: String, message: String },
}

impl StorageError {
    /// Classify an I/O error for `path`
    pub fn from_io(path: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            StorageError::NotFound {
                path: path.to_string(),
            }
        } else {
            StorageError::Io {
                path: path.to_string(),
                source: err,
            }
        }
    }
}

/// Advisory lock held until dropped
///
/// Backends without locking hand out an empty guard.
pub struct StorageLock {
    _guard: Option<Box<dyn Any + Send>>,
}

impl StorageLock {
    pub fn none() -> Self {
        Self { _guard: None }
    }

    /// Wrap a backend guard whose `Drop` releases the lock
    pub fn held<G: Any + Send>(guard: G) -> Self {
        Self {
            _guard: Some(Box::new(guard)),
        }
    }
}

impl std::fmt::Debug for StorageLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageLock")
            .field("held", &self._guard.is_some())
            .finish()
    }
}

/// Abstract storage interface
///
/// Every call may block; no timeout is imposed beyond the backend's own.
pub trait Storage: Send + Sync {
    fn exists(&self, path: &str) -> bool;

    fn read(&self, path: &str) -> StorageResult<Vec<u8>>;

    /// Write `content`, creating parents. Readers never observe a partial file.
    fn write(&self, path: &str, content: &[u8]) -> StorageResult<()>;

    fn delete(&self, path: &str) -> StorageResult<()>;

    /// Move `from` onto `to` in a single step, replacing `to`
    fn rename(&self, from: &str, to: &str) -> StorageResult<()>;

    /// Take an exclusive advisory lock named by `path`
    fn lock(&self, _path: &str) -> StorageResult<StorageLock> {
        Ok(StorageLock::none())
    }
}
