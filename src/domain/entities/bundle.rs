//! BundleReference entity - a served bundle URL and its kind

use crate::domain::value_objects::AssetKind;

/// Reference to a compressed bundle. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BundleReference {
    kind: AssetKind,
    url: String,
}

impl BundleReference {
    pub fn new(kind: AssetKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
        }
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Tag emitted in place of the compress block
    pub fn markup(&self) -> String {
        self.kind.markup(&self.url)
    }
}
