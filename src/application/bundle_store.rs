//! Bundle Store
//!
//! Content-addressed bundle files under `<output_dir>/<js|css>/<fp>.<ext>`.
//! A bundle whose file already exists is never recompressed or rewritten.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::entities::BundleReference;
use crate::domain::ports::{CompressionError, Compressor, Storage, StorageError, StorageResult};
use crate::domain::services::fingerprint;
use crate::domain::value_objects::{AssetKind, Fingerprint};

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Compression(#[from] CompressionError),
}

/// Outcome of a bundle write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBundle {
    pub reference: BundleReference,
    /// `false` when an existing file was reused
    pub written: bool,
}

pub struct BundleStore {
    storage: Arc<dyn Storage>,
    url: String,
    output_dir: String,
}

impl BundleStore {
    pub fn new(storage: Arc<dyn Storage>, url: impl Into<String>, output_dir: impl Into<String>) -> Self {
        Self {
            storage,
            url: url.into(),
            output_dir: output_dir.into().trim_matches('/').to_string(),
        }
    }

    pub fn from_config(storage: Arc<dyn Storage>, config: &Config) -> Self {
        Self::new(storage, config.url.clone(), config.output_dir.clone())
    }

    /// Storage path of the bundle for `fingerprint`
    pub fn path_for(&self, kind: AssetKind, fingerprint: &Fingerprint) -> String {
        format!(
            "{}/{}/{}.{}",
            self.output_dir,
            kind.directory_name(),
            fingerprint,
            kind.extension()
        )
    }

    /// Public URL of a storage path
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Storage path behind `url`, if it lives under the configured prefix.
    /// A query string or fragment (`?v=3`, `#top`) is not part of the path.
    pub fn path_of_url<'u>(&self, url: &'u str) -> Option<&'u str> {
        let prefix = self.url.trim_end_matches('/');
        let url = url.split(['?', '#']).next().unwrap_or(url);
        url.strip_prefix(prefix)
            .filter(|rest| rest.starts_with('/') || prefix.is_empty())
            .map(|rest| rest.trim_start_matches('/'))
            .filter(|rest| !rest.is_empty())
    }

    /// Store `content` uncompressed
    pub fn write(&self, kind: AssetKind, content: &str) -> StorageResult<BundleReference> {
        let fp = fingerprint(kind, content.as_bytes());
        let path = self.path_for(kind, &fp);
        if !self.storage.exists(&path) {
            self.storage.write(&path, content.as_bytes())?;
        }
        Ok(BundleReference::new(kind, self.url_for(&path)))
    }

    /// Fingerprint `resolved`, then compress and store it unless a bundle
    /// with that fingerprint already exists.
    pub fn write_compressed(
        &self,
        kind: AssetKind,
        resolved: &str,
        compressor: &dyn Compressor,
    ) -> Result<StoredBundle, BundleError> {
        let fp = fingerprint(kind, resolved.as_bytes());
        let path = self.path_for(kind, &fp);
        let reference = BundleReference::new(kind, self.url_for(&path));

        if self.storage.exists(&path) {
            return Ok(StoredBundle {
                reference,
                written: false,
            });
        }

        let compressed = compressor.compress(resolved.as_bytes(), kind)?;
        self.storage.write(&path, &compressed)?;
        Ok(StoredBundle {
            reference,
            written: true,
        })
    }

    pub fn exists(&self, url: &str) -> bool {
        self.path_of_url(url)
            .is_some_and(|path| self.storage.exists(path))
    }
}
