//! File system TemplateLoader implementation

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use encoding_rs::Encoding;
use ignore::WalkBuilder;

use crate::domain::entities::Template;
use crate::domain::ports::{LoaderError, TemplateLoader};

/// Loads templates from an ordered list of directories.
///
/// Template names are paths relative to a root, `/`-separated. When several
/// roots contain the same name the first root wins.
pub struct FilesystemLoader {
    name: &'static str,
    roots: Vec<PathBuf>,
    encoding: &'static Encoding,
}

impl FilesystemLoader {
    pub fn new(roots: Vec<PathBuf>, encoding: &'static Encoding) -> Self {
        Self::named("filesystem", roots, encoding)
    }

    pub(crate) fn named(
        name: &'static str,
        roots: Vec<PathBuf>,
        encoding: &'static Encoding,
    ) -> Self {
        Self {
            name,
            roots,
            encoding,
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn decode(&self, path: &Path, bytes: &[u8]) -> Result<String, LoaderError> {
        let (text, _, had_errors) = self.encoding.decode(bytes);
        if had_errors {
            return Err(LoaderError::Decode {
                path: path.to_path_buf(),
                charset: self.encoding.name().to_string(),
            });
        }
        Ok(text.into_owned())
    }
}

/// Names may not climb out of a root
fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && Path::new(name)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

fn template_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    (!parts.is_empty()).then(|| parts.join("/"))
}

impl TemplateLoader for FilesystemLoader {
    fn name(&self) -> &str {
        self.name
    }

    fn list_templates(&self) -> Result<Vec<String>, LoaderError> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();

        for root in self.roots.iter().filter(|r| r.is_dir()) {
            let walker = WalkBuilder::new(root)
                .standard_filters(false)
                .hidden(true)
                .sort_by_file_name(|a, b| a.cmp(b))
                .build();

            for entry in walker {
                let entry = entry.map_err(|e| LoaderError::Walk {
                    root: root.clone(),
                    message: e.to_string(),
                })?;
                if !entry.file_type().is_some_and(|t| t.is_file()) {
                    continue;
                }
                if let Some(name) = template_name(root, entry.path()) {
                    if seen.insert(name.clone()) {
                        names.push(name);
                    }
                }
            }
        }

        Ok(names)
    }

    fn locate(&self, name: &str) -> Result<Option<Template>, LoaderError> {
        if !is_safe_name(name) {
            return Ok(None);
        }

        for root in &self.roots {
            let candidate = root.join(name);
            if !candidate.is_file() {
                continue;
            }
            let bytes = std::fs::read(&candidate).map_err(|source| LoaderError::Io {
                path: candidate.clone(),
                source,
            })?;
            let source = self.decode(&candidate, &bytes)?;
            return Ok(Some(Template::new(name, source).with_origin(candidate)));
        }

        Ok(None)
    }
}
