//! Runtime Resolver
//!
//! Render-time counterpart of the generator. In `OfflineMode::Enabled` a
//! render collects its compress blocks, derives the same manifest key the
//! generator recorded and emits the stored bundle markup in their place.
//! In `OfflineMode::Disabled` blocks are emitted as written and the
//! manifest is never read.

use std::sync::{Arc, RwLock};

use crate::config::Config;
use crate::domain::entities::{AssetBlock, BundleReference, Manifest, Template};
use crate::domain::ports::{Storage, TemplateEngine, TemplateLoader, TemplateRenderError};
use crate::domain::services::sequence_fingerprint;
use crate::domain::value_objects::RenderContext;
use crate::error::{OfflineGenerationError, PrecompressError, PrecompressResult};

use super::manifest_repository::ManifestRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfflineMode {
    Enabled,
    Disabled,
}

impl OfflineMode {
    /// Enabled only when both `enabled` and `offline_enabled` are set
    pub fn from_config(config: &Config) -> Self {
        if config.enabled && config.offline_enabled {
            OfflineMode::Enabled
        } else {
            OfflineMode::Disabled
        }
    }
}

pub struct RuntimeResolver {
    mode: OfflineMode,
    loader: Arc<dyn TemplateLoader>,
    engine: Arc<dyn TemplateEngine>,
    manifests: ManifestRepository,
    cached: RwLock<Option<Arc<Manifest>>>,
}

impl RuntimeResolver {
    pub fn new(
        config: &Config,
        storage: Arc<dyn Storage>,
        loader: Arc<dyn TemplateLoader>,
        engine: Arc<dyn TemplateEngine>,
    ) -> Self {
        Self {
            mode: OfflineMode::from_config(config),
            loader,
            engine,
            manifests: ManifestRepository::from_config(storage, config),
            cached: RwLock::new(None),
        }
    }

    pub fn with_mode(mut self, mode: OfflineMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> OfflineMode {
        self.mode
    }

    /// Drop the cached manifest so the next lookup rereads it
    pub fn reload(&self) {
        *self.cached.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Bundles recorded for rendering `template` under `context`
    pub fn resolve(
        &self,
        template: &str,
        context: &RenderContext,
    ) -> PrecompressResult<Vec<BundleReference>> {
        if self.mode == OfflineMode::Disabled {
            return Err(OfflineGenerationError::OfflineModeDisabled.into());
        }
        let template = self.load(template, context)?;
        let (_, blocks) = self.collect(&template, context)?;
        self.lookup(template.name(), &blocks)
    }

    /// Render the named template
    pub fn render(&self, template: &str, context: &RenderContext) -> PrecompressResult<String> {
        let template = self.load(template, context)?;
        self.render_template(&template, context)
    }

    /// Render `template`, splicing in bundle markup (enabled) or the raw
    /// block content (disabled)
    pub fn render_template(
        &self,
        template: &Template,
        context: &RenderContext,
    ) -> PrecompressResult<String> {
        if self.mode == OfflineMode::Disabled {
            let mut passthrough = |block: AssetBlock| block.content().to_string();
            return self
                .engine
                .render(template, context, &mut passthrough)
                .map_err(|e| render_error(template.name(), context, e));
        }

        let (output, blocks) = self.collect(template, context)?;
        if blocks.is_empty() {
            return Ok(output);
        }

        let references = self.lookup(template.name(), &blocks)?;
        let mut markups = references.iter().map(BundleReference::markup);
        let mut splice = |_: AssetBlock| markups.next().unwrap_or_default();
        self.engine
            .render(template, context, &mut splice)
            .map_err(|e| render_error(template.name(), context, e))
    }

    fn load(&self, name: &str, context: &RenderContext) -> PrecompressResult<Template> {
        self.loader.locate(name)?.ok_or_else(|| {
            render_error(
                name,
                context,
                TemplateRenderError::NotFound {
                    name: name.to_string(),
                },
            )
        })
    }

    fn collect(
        &self,
        template: &Template,
        context: &RenderContext,
    ) -> PrecompressResult<(String, Vec<AssetBlock>)> {
        let mut blocks = Vec::new();
        let mut handler = |block: AssetBlock| {
            blocks.push(block);
            String::new()
        };
        let output = self
            .engine
            .render(template, context, &mut handler)
            .map_err(|e| render_error(template.name(), context, e))?;
        Ok((output, blocks))
    }

    fn lookup(&self, template: &str, blocks: &[AssetBlock]) -> PrecompressResult<Vec<BundleReference>> {
        let key = sequence_fingerprint(blocks);
        self.manifest()?
            .get(&key)
            .map(|references| references.to_vec())
            .ok_or_else(|| {
                OfflineGenerationError::MissingEntry {
                    template: template.to_string(),
                    fingerprint: key,
                }
                .into()
            })
    }

    /// The manifest, read once and cached. An absent manifest is not cached.
    fn manifest(&self) -> PrecompressResult<Arc<Manifest>> {
        if let Some(manifest) = self
            .cached
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
        {
            return Ok(manifest.clone());
        }

        let manifest = self.manifests.load_existing()?.ok_or_else(|| {
            OfflineGenerationError::ManifestMissing {
                path: self.manifests.path(),
            }
        })?;
        let manifest = Arc::new(manifest);
        *self.cached.write().unwrap_or_else(|e| e.into_inner()) = Some(manifest.clone());
        Ok(manifest)
    }
}

fn render_error(template: &str, context: &RenderContext, source: TemplateRenderError) -> PrecompressError {
    PrecompressError::TemplateRender {
        template: template.to_string(),
        context: context.to_string(),
        source,
    }
}
