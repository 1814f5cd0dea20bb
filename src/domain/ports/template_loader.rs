//! TemplateLoader port
//!
//! Locates template sources by name. Loaders are composed into an ordered
//! chain where the first loader that finds a name wins; wrapping loaders
//! (such as the cached loader) expose the loaders they wrap via `children`.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::Template;

#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template {path} is not valid {charset}")]
    Decode { path: PathBuf, charset: String },

    #[error("failed to list templates under {root}: {message}")]
    Walk { root: PathBuf, message: String },
}

pub trait TemplateLoader: Send + Sync {
    /// Short identifier used in logs (`filesystem`, `app_directories`, ...)
    fn name(&self) -> &str;

    /// Every template name this loader can serve, in a stable order
    fn list_templates(&self) -> Result<Vec<String>, LoaderError>;

    /// Find `name`; `Ok(None)` is a miss, letting the next loader try
    fn locate(&self, name: &str) -> Result<Option<Template>, LoaderError>;

    /// Loaders wrapped by this one, if it is a wrapper
    fn children(&self) -> Option<&[Arc<dyn TemplateLoader>]> {
        None
    }
}
