//! AssetBlock entity - one `{% compress %}` region as it renders under a context

use crate::domain::value_objects::AssetKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBlock {
    kind: AssetKind,
    /// Rendered block body (the markup between the compress tags)
    content: String,
}

impl AssetBlock {
    pub fn new(kind: AssetKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
