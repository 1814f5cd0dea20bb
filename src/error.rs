//! Error types for Precompress
//!
//! Uses `thiserror` for library errors. Port-level errors (storage, rendering,
//! compression) live next to their ports and are wrapped here.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{CompressionError, LoaderError, StorageError, TemplateRenderError};
use crate::domain::value_objects::{AssetKind, Fingerprint};

/// Result type alias for Precompress operations
pub type PrecompressResult<T> = Result<T, PrecompressError>;

/// Main error type for Precompress operations
#[derive(Error, Debug)]
pub enum PrecompressError {
    /// Storage capability failure, propagated unchanged
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Render-time lookup failed because offline generation was not run
    #[error(transparent)]
    OfflineGeneration(#[from] OfflineGenerationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A template loader failed (I/O or decoding), as opposed to a miss
    #[error(transparent)]
    Loader(#[from] LoaderError),

    /// A template failed to render while enumerating asset blocks
    #[error("failed to render template '{template}' with context {context}: {source}")]
    TemplateRender {
        template: String,
        context: String,
        #[source]
        source: TemplateRenderError,
    },

    /// The pluggable compressor rejected a block
    #[error("failed to compress {kind} block in '{template}' with context {context}: {source}")]
    Compression {
        template: String,
        context: String,
        kind: AssetKind,
        #[source]
        source: CompressionError,
    },

    /// A block references a file that cannot be read through storage
    #[error("cannot compress '{url}' referenced from '{template}': {reason}")]
    UncompressableFile {
        template: String,
        url: String,
        reason: String,
    },

    /// `enabled = false` and the run was not forced
    #[error("compressor is disabled - set `enabled = true` or use --force to override")]
    CompressorDisabled,

    /// `offline_enabled = false` and the run was not forced
    #[error("offline compression is disabled - set `offline_enabled = true` or use --force to override")]
    OfflineDisabled,
}

/// Raised when the render path needs the manifest but generation never ran
/// for the requested combination.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OfflineGenerationError {
    #[error("offline manifest '{path}' not found - run `precompress compress` first")]
    ManifestMissing { path: String },

    #[error("you have offline compression enabled but key \"{fingerprint}\" for template '{template}' is missing from the offline manifest - run `precompress compress` first")]
    MissingEntry {
        template: String,
        fingerprint: Fingerprint,
    },

    #[error("offline mode is disabled; the manifest is not consulted")]
    OfflineModeDisabled,
}

/// Manifest persistence errors
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("invalid manifest at '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("failed to serialize manifest: {message}")]
    Serialize { message: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {file}: {source}")]
    Read {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    #[error("unknown file charset '{label}'")]
    UnknownCharset { label: String },

    #[error("invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
}
