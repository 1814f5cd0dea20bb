//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{ManifestRepository, OfflineGenerator, RuntimeResolver};
use crate::config::{Config, Verbosity};
use crate::domain::ports::{GenerationEventSink, Storage, TemplateEngine, TemplateLoader};
use crate::error::PrecompressResult;
use crate::infrastructure::{
    create_compressor, AppDirectoriesLoader, CachedLoader, FilesystemLoader, JsonEventSink,
    LocalStorage, MiniTemplateEngine, TextEventSink,
};

/// Storage rooted at `config.root`
pub fn create_storage(config: &Config) -> Arc<dyn Storage> {
    Arc::new(LocalStorage::new(config.root.clone()))
}

/// A cached loader over the filesystem and app-directory loaders
pub fn create_loader(config: &Config) -> PrecompressResult<Arc<dyn TemplateLoader>> {
    let charset = config.charset()?;
    let loaders: Vec<Arc<dyn TemplateLoader>> = vec![
        Arc::new(FilesystemLoader::new(config.template_roots.clone(), charset)),
        Arc::new(AppDirectoriesLoader::new(&config.app_dirs, charset)),
    ];
    Ok(Arc::new(CachedLoader::new(loaders)))
}

fn create_engine(loader: Arc<dyn TemplateLoader>) -> Arc<dyn TemplateEngine> {
    Arc::new(MiniTemplateEngine::new(loader))
}

/// Create an offline generator with all dependencies wired up
pub fn create_generator(config: &Config) -> PrecompressResult<OfflineGenerator> {
    let loader = create_loader(config)?;
    OfflineGenerator::new(
        config.clone(),
        create_storage(config),
        loader.clone(),
        create_engine(loader),
        create_compressor(config.compressor),
    )
}

/// Create a runtime resolver with all dependencies wired up
pub fn create_resolver(config: &Config) -> PrecompressResult<RuntimeResolver> {
    let loader = create_loader(config)?;
    Ok(RuntimeResolver::new(
        config,
        create_storage(config),
        loader.clone(),
        create_engine(loader),
    ))
}

pub fn create_manifest_repository(config: &Config) -> ManifestRepository {
    ManifestRepository::from_config(create_storage(config), config)
}

/// NDJSON on stdout for `--json`, human lines on stderr otherwise
pub fn create_event_sink(json: bool, verbosity: Verbosity) -> Arc<dyn GenerationEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(TextEventSink::stderr(verbosity))
    }
}
