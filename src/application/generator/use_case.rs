//! Offline Generator Use Case
//!
//! Orchestrates a full regeneration:
//! 1. Enumerate templates through the loader chain
//! 2. Render each template under each of its contexts, collecting blocks
//! 3. Resolve, compress and store every block as a bundle
//! 4. Replace the manifest in one atomic swap
//!
//! Templates that do not parse are skipped. Any render, compression or
//! storage failure aborts the run before the manifest is touched, leaving the
//! previous document in place.

use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;

use encoding_rs::Encoding;

use crate::config::{Config, Verbosity};
use crate::domain::entities::{AssetBlock, Manifest, Template};
use crate::domain::ports::{
    Compressor, GenerationEvent, GenerationEventSink, Storage, StorageError, TemplateEngine,
    TemplateLoader,
};
use crate::domain::services::{join_hunks, parse_hunks, sequence_fingerprint, Hunk};
use crate::domain::value_objects::RenderContext;
use crate::error::{ManifestError, PrecompressError, PrecompressResult};
use crate::infrastructure::TextEventSink;

use super::super::bundle_store::{BundleError, BundleStore};
use super::super::manifest_repository::ManifestRepository;
use super::options::GenerateOptions;
use super::result::GenerationReport;

pub struct OfflineGenerator {
    config: Config,
    charset: &'static Encoding,
    storage: Arc<dyn Storage>,
    loader: Arc<dyn TemplateLoader>,
    engine: Arc<dyn TemplateEngine>,
    compressor: Arc<dyn Compressor>,
    bundles: BundleStore,
    manifests: ManifestRepository,
}

impl OfflineGenerator {
    pub fn new(
        config: Config,
        storage: Arc<dyn Storage>,
        loader: Arc<dyn TemplateLoader>,
        engine: Arc<dyn TemplateEngine>,
        compressor: Arc<dyn Compressor>,
    ) -> PrecompressResult<Self> {
        let charset = config.charset()?;
        let bundles = BundleStore::from_config(storage.clone(), &config);
        let manifests = ManifestRepository::from_config(storage.clone(), &config);
        Ok(Self {
            config,
            charset,
            storage,
            loader,
            engine,
            compressor,
            bundles,
            manifests,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Batch entry point: log progress to `log` and return `(count, rendered)`
    pub fn generate_offline(
        &self,
        log: &mut (dyn Write + Send),
        verbosity: Verbosity,
    ) -> PrecompressResult<(usize, Vec<String>)> {
        let sink = TextEventSink::with_writer(log, verbosity);
        let report = self.run(&GenerateOptions::new(), &sink)?;
        Ok(report.into_parts())
    }

    /// Run a full regeneration, reporting progress to `sink`
    pub fn generate(
        &self,
        options: &GenerateOptions,
        sink: Arc<dyn GenerationEventSink>,
    ) -> PrecompressResult<GenerationReport> {
        self.run(options, sink.as_ref())
    }

    fn run(
        &self,
        options: &GenerateOptions,
        sink: &dyn GenerationEventSink,
    ) -> PrecompressResult<GenerationReport> {
        if !options.force {
            if !self.config.enabled {
                return Err(PrecompressError::CompressorDisabled);
            }
            if !self.config.offline_enabled {
                return Err(PrecompressError::OfflineDisabled);
            }
        }

        let detailed = sink.wants_detailed_events();
        let (names, excluded) = self.templates_in_scope(options)?;
        sink.on_event(GenerationEvent::Started {
            template_count: names.len(),
        });
        if detailed {
            for template in excluded {
                sink.on_event(GenerationEvent::TemplateSkipped {
                    template,
                    reason: "extension not in scope".to_string(),
                });
            }
        }

        let mut manifest = Manifest::new();
        let mut report = GenerationReport::new();
        let mut seen: HashSet<(String, String)> = HashSet::new();

        for name in &names {
            let Some(template) = self.loader.locate(name)? else {
                continue;
            };
            if let Err(e) = self.engine.validate(&template) {
                if detailed {
                    sink.on_event(GenerationEvent::TemplateSkipped {
                        template: name.clone(),
                        reason: e.to_string(),
                    });
                }
                continue;
            }

            let mut produced_blocks = false;
            for context in self.config.contexts_for(name) {
                if !seen.insert((name.clone(), context.to_string())) {
                    continue;
                }

                let blocks = self.collect_blocks(&template, context)?;
                if blocks.is_empty() {
                    continue;
                }
                produced_blocks = true;

                let key = sequence_fingerprint(&blocks);
                let mut references = Vec::with_capacity(blocks.len());
                for block in &blocks {
                    let resolved = self.resolve_block(name, block)?;
                    let stored = self
                        .bundles
                        .write_compressed(block.kind(), &resolved, self.compressor.as_ref())
                        .map_err(|e| match e {
                            BundleError::Storage(e) => PrecompressError::Storage(e),
                            BundleError::Compression(source) => PrecompressError::Compression {
                                template: name.clone(),
                                context: context.to_string(),
                                kind: block.kind(),
                                source,
                            },
                        })?;

                    let url = stored.reference.url().to_string();
                    if stored.written {
                        report.written += 1;
                        if detailed {
                            sink.on_event(GenerationEvent::BundleWritten { url });
                        }
                    } else {
                        report.reused += 1;
                        if detailed {
                            sink.on_event(GenerationEvent::BundleReused { url });
                        }
                    }
                    report.rendered.push(stored.reference.markup());
                    references.push(stored.reference);
                }

                manifest.insert(key, references);
                report.count += 1;
                if detailed {
                    sink.on_event(GenerationEvent::Rendered {
                        template: name.clone(),
                        context: context.to_string(),
                        block_count: blocks.len(),
                    });
                }
            }

            if !produced_blocks && detailed {
                sink.on_event(GenerationEvent::TemplateSkipped {
                    template: name.clone(),
                    reason: "no compress blocks".to_string(),
                });
            }
        }

        self.manifests.replace(&manifest).map_err(|e| match e {
            ManifestError::Storage(e) => PrecompressError::Storage(e),
            e => PrecompressError::Manifest(e),
        })?;
        report.entries = manifest.len();

        sink.on_event(GenerationEvent::ManifestWritten {
            path: self.manifests.path(),
            entry_count: report.entries,
        });
        sink.on_event(GenerationEvent::Completed {
            count: report.count,
            written: report.written,
            reused: report.reused,
        });

        Ok(report)
    }

    /// Template names split into (in scope, excluded by extension)
    fn templates_in_scope(
        &self,
        options: &GenerateOptions,
    ) -> PrecompressResult<(Vec<String>, Vec<String>)> {
        let mut config = self.config.clone();
        if let Some(extensions) = &options.extensions {
            config.extensions = extensions.clone();
        }

        let (names, excluded) = self
            .loader
            .list_templates()?
            .into_iter()
            .partition(|name| {
                let template = Template::new(name.as_str(), "");
                config.accepts_extension(template.extension())
            });
        Ok((names, excluded))
    }

    fn collect_blocks(
        &self,
        template: &Template,
        context: &RenderContext,
    ) -> PrecompressResult<Vec<AssetBlock>> {
        let mut blocks = Vec::new();
        let mut handler = |block: AssetBlock| {
            blocks.push(block);
            String::new()
        };
        self.engine
            .render(template, context, &mut handler)
            .map_err(|source| PrecompressError::TemplateRender {
                template: template.name().to_string(),
                context: context.to_string(),
                source,
            })?;
        Ok(blocks)
    }

    /// The bundle body for `block`: its hunks, external ones read from
    /// storage, joined with the kind's separator. A block without any
    /// script or style tags is bundled as its trimmed text.
    fn resolve_block(&self, template: &str, block: &AssetBlock) -> PrecompressResult<String> {
        let hunks = parse_hunks(block.content());
        if hunks.is_empty() {
            return Ok(block.content().trim().to_string());
        }

        let mut texts = Vec::with_capacity(hunks.len());
        for hunk in hunks {
            if hunk.kind() != block.kind() {
                return Err(PrecompressError::UncompressableFile {
                    template: template.to_string(),
                    url: match &hunk {
                        Hunk::External { url, .. } => url.clone(),
                        Hunk::Inline { .. } => "<inline>".to_string(),
                    },
                    reason: format!("{} content inside a {} block", hunk.kind(), block.kind()),
                });
            }

            match hunk {
                Hunk::Inline { body, .. } => texts.push(body),
                Hunk::External { url, .. } => texts.push(self.read_external(template, &url)?),
            }
        }
        Ok(join_hunks(block.kind(), &texts))
    }

    fn read_external(&self, template: &str, url: &str) -> PrecompressResult<String> {
        let uncompressable = |reason: String| PrecompressError::UncompressableFile {
            template: template.to_string(),
            url: url.to_string(),
            reason,
        };

        let path = self
            .bundles
            .path_of_url(url)
            .ok_or_else(|| uncompressable(format!("not served under '{}'", self.config.url)))?;
        let bytes = self.storage.read(path).map_err(|e| match e {
            StorageError::NotFound { .. } => uncompressable(e.to_string()),
            e => PrecompressError::Storage(e),
        })?;

        let (text, _, had_errors) = self.charset.decode(&bytes);
        if had_errors {
            return Err(uncompressable(format!("not valid {}", self.charset.name())));
        }
        Ok(text.into_owned())
    }
}
