//! Cached loader - memoizes lookups across the loaders it wraps

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::Template;
use crate::domain::ports::{LoaderError, TemplateLoader};

use super::chain::{list_union, locate_first};

/// Wraps an ordered list of loaders and remembers every lookup, misses
/// included. Errors are not cached.
pub struct CachedLoader {
    loaders: Vec<Arc<dyn TemplateLoader>>,
    cache: Mutex<HashMap<String, Option<Template>>>,
}

impl CachedLoader {
    pub fn new(loaders: Vec<Arc<dyn TemplateLoader>>) -> Self {
        Self {
            loaders,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Forget every cached lookup
    pub fn reset(&self) {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl TemplateLoader for CachedLoader {
    fn name(&self) -> &str {
        "cached"
    }

    fn list_templates(&self) -> Result<Vec<String>, LoaderError> {
        list_union(&self.loaders)
    }

    fn locate(&self, name: &str) -> Result<Option<Template>, LoaderError> {
        if let Some(hit) = self
            .cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
        {
            return Ok(hit.clone());
        }

        let found = locate_first(&self.loaders, name)?;
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.to_string(), found.clone());
        Ok(found)
    }

    fn children(&self) -> Option<&[Arc<dyn TemplateLoader>]> {
        Some(&self.loaders)
    }
}
