//! Application-directories TemplateLoader
//!
//! Every application directory contributes its `templates/` sub-directory,
//! searched in declaration order.

use std::path::PathBuf;

use encoding_rs::Encoding;

use crate::domain::entities::Template;
use crate::domain::ports::{LoaderError, TemplateLoader};

use super::FilesystemLoader;

pub struct AppDirectoriesLoader {
    inner: FilesystemLoader,
}

impl AppDirectoriesLoader {
    pub fn new(app_dirs: &[PathBuf], encoding: &'static Encoding) -> Self {
        let roots = app_dirs.iter().map(|app| app.join("templates")).collect();
        Self {
            inner: FilesystemLoader::named("app_directories", roots, encoding),
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        self.inner.roots()
    }
}

impl TemplateLoader for AppDirectoriesLoader {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn list_templates(&self) -> Result<Vec<String>, LoaderError> {
        self.inner.list_templates()
    }

    fn locate(&self, name: &str) -> Result<Option<Template>, LoaderError> {
        self.inner.locate(name)
    }
}
