//! Manifest entity - fingerprint to bundle references
//!
//! One document per generation epoch. It is a pure data structure; loading
//! and the atomic replace are handled by `ManifestRepository`.

use std::collections::BTreeMap;

use crate::domain::entities::BundleReference;
use crate::domain::value_objects::Fingerprint;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<Fingerprint, Vec<BundleReference>>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Record the bundles for a render. Re-recording a key replaces it.
    pub fn insert(&mut self, key: Fingerprint, bundles: Vec<BundleReference>) {
        self.entries.insert(key, bundles);
    }

    pub fn get(&self, key: &Fingerprint) -> Option<&[BundleReference]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &Fingerprint) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&Fingerprint, &[BundleReference])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Every bundle URL referenced by the manifest, in key order
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.values().flatten().map(BundleReference::url)
    }
}
