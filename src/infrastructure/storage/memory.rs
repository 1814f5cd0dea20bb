//! In-memory Storage Implementation
//!
//! Cloneable and shared: clones see the same files. Counts writes so callers
//! can check that unchanged bundles are not rewritten.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::{Storage, StorageError, StorageResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn files(&self) -> MutexGuard<'_, BTreeMap<String, Vec<u8>>> {
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Number of successful `write` calls so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Stored paths in order
    pub fn paths(&self) -> Vec<String> {
        self.files().keys().cloned().collect()
    }

    /// Seed a file without counting it as a write
    pub fn insert(&self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.files().insert(normalize(&path.into()), content.into());
    }
}

fn normalize(path: &str) -> String {
    path.trim_start_matches('/').to_string()
}

impl Storage for MemoryStorage {
    fn exists(&self, path: &str) -> bool {
        self.files().contains_key(&normalize(path))
    }

    fn read(&self, path: &str) -> StorageResult<Vec<u8>> {
        self.files()
            .get(&normalize(path))
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                path: path.to_string(),
            })
    }

    fn write(&self, path: &str, content: &[u8]) -> StorageResult<()> {
        self.files().insert(normalize(path), content.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn delete(&self, path: &str) -> StorageResult<()> {
        self.files()
            .remove(&normalize(path))
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound {
                path: path.to_string(),
            })
    }

    fn rename(&self, from: &str, to: &str) -> StorageResult<()> {
        let mut files = self.files();
        let content = files
            .remove(&normalize(from))
            .ok_or_else(|| StorageError::NotFound {
                path: from.to_string(),
            })?;
        files.insert(normalize(to), content);
        Ok(())
    }
}
