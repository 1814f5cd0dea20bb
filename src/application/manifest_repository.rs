//! Manifest Repository
//!
//! Persists the manifest as pretty-printed JSON at `<output_dir>/manifest.json`:
//!
//! ```json
//! {
//!   "f5e179b8eca4": [
//!     { "kind": "script", "url": "/media/CACHE/js/f5e179b8eca4.js" }
//!   ]
//! }
//! ```
//!
//! `replace` never mutates the document in place. The new document goes to
//! `manifest.json.tmp` and is renamed over the old one while the storage
//! advisory lock `manifest.lock` is held, so readers see either the old or the
//! new document.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::entities::{BundleReference, Manifest};
use crate::domain::ports::{Storage, StorageError};
use crate::domain::value_objects::{AssetKind, Fingerprint};
use crate::error::ManifestError;

/// JSON representation of a bundle reference
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonBundle {
    kind: AssetKind,
    url: String,
}

type JsonManifest = BTreeMap<String, Vec<JsonBundle>>;

/// Serialize `manifest` in its persisted form
pub fn manifest_to_json(manifest: &Manifest) -> Result<String, ManifestError> {
    let doc: JsonManifest = manifest
        .iter()
        .map(|(fp, bundles)| {
            let bundles = bundles
                .iter()
                .map(|b| JsonBundle {
                    kind: b.kind(),
                    url: b.url().to_string(),
                })
                .collect();
            (fp.to_string(), bundles)
        })
        .collect();

    let mut json = serde_json::to_string_pretty(&doc).map_err(|e| ManifestError::Serialize {
        message: e.to_string(),
    })?;
    json.push('\n');
    Ok(json)
}

/// Parse a persisted manifest; `path` is only used in error messages
pub fn manifest_from_json(path: &str, text: &str) -> Result<Manifest, ManifestError> {
    let parse_err = |message: String| ManifestError::Parse {
        path: path.to_string(),
        message,
    };

    let doc: JsonManifest = serde_json::from_str(text).map_err(|e| parse_err(e.to_string()))?;
    let mut manifest = Manifest::new();
    for (key, bundles) in doc {
        let fp = Fingerprint::parse(&key).map_err(|e| parse_err(e.to_string()))?;
        let bundles = bundles
            .into_iter()
            .map(|b| BundleReference::new(b.kind, b.url))
            .collect();
        manifest.insert(fp, bundles);
    }
    Ok(manifest)
}

pub struct ManifestRepository {
    storage: Arc<dyn Storage>,
    output_dir: String,
}

impl ManifestRepository {
    pub fn new(storage: Arc<dyn Storage>, output_dir: impl Into<String>) -> Self {
        Self {
            storage,
            output_dir: output_dir.into().trim_matches('/').to_string(),
        }
    }

    pub fn from_config(storage: Arc<dyn Storage>, config: &Config) -> Self {
        Self::new(storage, config.output_dir.clone())
    }

    /// Storage path of the manifest document
    pub fn path(&self) -> String {
        format!("{}/manifest.json", self.output_dir)
    }

    fn tmp_path(&self) -> String {
        format!("{}/manifest.json.tmp", self.output_dir)
    }

    fn lock_path(&self) -> String {
        format!("{}/manifest.lock", self.output_dir)
    }

    /// Load the manifest, or an empty one if none was written yet
    pub fn load(&self) -> Result<Manifest, ManifestError> {
        Ok(self.load_existing()?.unwrap_or_default())
    }

    /// Load the manifest, distinguishing "absent" from "empty"
    pub fn load_existing(&self) -> Result<Option<Manifest>, ManifestError> {
        let path = self.path();
        let bytes = match self.storage.read(&path) {
            Ok(bytes) => bytes,
            Err(StorageError::NotFound { .. }) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let text = String::from_utf8(bytes).map_err(|e| ManifestError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        manifest_from_json(&path, &text).map(Some)
    }

    /// Atomically swap in `manifest` as the whole persisted document
    pub fn replace(&self, manifest: &Manifest) -> Result<(), ManifestError> {
        let json = manifest_to_json(manifest)?;
        let tmp = self.tmp_path();

        let _lock = self.storage.lock(&self.lock_path())?;
        self.storage.write(&tmp, json.as_bytes())?;
        if let Err(e) = self.storage.rename(&tmp, &self.path()) {
            let _ = self.storage.delete(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    pub fn lookup(&self, fingerprint: &Fingerprint) -> Result<Option<Vec<BundleReference>>, ManifestError> {
        Ok(self
            .load()?
            .get(fingerprint)
            .map(|bundles| bundles.to_vec()))
    }

    /// Remove the persisted manifest; returns whether one existed
    pub fn delete(&self) -> Result<bool, ManifestError> {
        match self.storage.delete(&self.path()) {
            Ok(()) => Ok(true),
            Err(StorageError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
