//! Loader chain - chain of responsibility over template loaders

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::Template;
use crate::domain::ports::{LoaderError, TemplateLoader};

/// Ordered loaders; `locate` returns the first hit.
#[derive(Clone, Default)]
pub struct LoaderChain {
    loaders: Vec<Arc<dyn TemplateLoader>>,
}

impl LoaderChain {
    pub fn new(loaders: Vec<Arc<dyn TemplateLoader>>) -> Self {
        Self { loaders }
    }

    /// Leaf loaders in search order, with wrapping loaders unwrapped
    pub fn flatten(&self) -> Vec<Arc<dyn TemplateLoader>> {
        fn walk(loaders: &[Arc<dyn TemplateLoader>], out: &mut Vec<Arc<dyn TemplateLoader>>) {
            for loader in loaders {
                match loader.children() {
                    Some(children) => walk(children, out),
                    None => out.push(Arc::clone(loader)),
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.loaders, &mut out);
        out
    }
}

/// Ordered, de-duplicated union of every loader's templates
pub(crate) fn list_union(
    loaders: &[Arc<dyn TemplateLoader>],
) -> Result<Vec<String>, LoaderError> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for loader in loaders {
        for name in loader.list_templates()? {
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }
    }
    Ok(names)
}

pub(crate) fn locate_first(
    loaders: &[Arc<dyn TemplateLoader>],
    name: &str,
) -> Result<Option<Template>, LoaderError> {
    for loader in loaders {
        if let Some(template) = loader.locate(name)? {
            return Ok(Some(template));
        }
    }
    Ok(None)
}

impl TemplateLoader for LoaderChain {
    fn name(&self) -> &str {
        "chain"
    }

    fn list_templates(&self) -> Result<Vec<String>, LoaderError> {
        list_union(&self.loaders)
    }

    fn locate(&self, name: &str) -> Result<Option<Template>, LoaderError> {
        locate_first(&self.loaders, name)
    }

    fn children(&self) -> Option<&[Arc<dyn TemplateLoader>]> {
        Some(&self.loaders)
    }
}
