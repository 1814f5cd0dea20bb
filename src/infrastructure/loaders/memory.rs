//! In-memory loader for templates that never touch disk

use std::collections::BTreeMap;

use crate::domain::entities::Template;
use crate::domain::ports::{LoaderError, TemplateLoader};

#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    templates: BTreeMap<String, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.insert(name, source);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.templates.insert(name.into(), source.into());
    }
}

impl TemplateLoader for MemoryLoader {
    fn name(&self) -> &str {
        "memory"
    }

    fn list_templates(&self) -> Result<Vec<String>, LoaderError> {
        Ok(self.templates.keys().cloned().collect())
    }

    fn locate(&self, name: &str) -> Result<Option<Template>, LoaderError> {
        Ok(self
            .templates
            .get(name)
            .map(|source| Template::new(name, source.clone())))
    }
}
