//! Precompress - offline asset compressor
//!
//! Precompress renders templates ahead of time, bundles the script and style
//! blocks they contain into content-addressed files and records a manifest so
//! that serving a page only needs one lookup per render.
//!
//! ## Layers
//!
//! - `domain` - value objects, entities, ports and pure services
//! - `application` - the offline generator and the runtime resolver
//! - `infrastructure` - storage, template loaders, the template engine, sinks
//! - `presentation` - CLI definition, dependency wiring, output formatting

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    BundleStore, GenerateOptions, GenerationReport, ManifestRepository, OfflineGenerator,
    OfflineMode, RuntimeResolver,
};
pub use config::{Config, ScopedConfig, Verbosity};
pub use domain::entities::{AssetBlock, BundleReference, Manifest, Template};
pub use domain::value_objects::{AssetKind, Fingerprint, RenderContext};
pub use error::{OfflineGenerationError, PrecompressError, PrecompressResult};
