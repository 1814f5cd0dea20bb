//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RenderContext;
use crate::error::{ConfigError, PrecompressResult};

use super::loader::{self, ConfigWarning};

/// Context(s) the generator renders every template under.
///
/// Accepts a single table:
///   [offline_context]
///   condition = "red"
///
/// Or an array of tables, one render per entry:
///   [[offline_context]]
///   condition = "red"
///   [[offline_context]]
///   condition = "blue"
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct OfflineContexts(pub Vec<RenderContext>);

impl Default for OfflineContexts {
    fn default() -> Self {
        Self(vec![RenderContext::new()])
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum OfflineContextsDe {
    List(Vec<RenderContext>),
    Single(RenderContext),
}

impl<'de> Deserialize<'de> for OfflineContexts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match OfflineContextsDe::deserialize(deserializer)? {
            OfflineContextsDe::List(list) if list.is_empty() => Ok(Self::default()),
            OfflineContextsDe::List(list) => Ok(Self(list)),
            OfflineContextsDe::Single(ctx) => Ok(Self(vec![ctx])),
        }
    }
}

/// Per-template offline settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OfflineConfig {
    /// Template name → contexts it must be rendered under (feature-flag
    /// branches and similar). Overrides `offline_context` for that template.
    #[serde(default)]
    pub variants: BTreeMap<String, Vec<RenderContext>>,
}

/// Which built-in compressor minifies bundles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompressorKind {
    Identity,
    #[default]
    Whitespace,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Map a numeric level (`0` quiet .. `3` debug)
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "quiet" | "0" => Some(Verbosity::Quiet),
            "normal" | "1" => Some(Verbosity::Normal),
            "verbose" | "2" => Some(Verbosity::Verbose),
            "debug" | "3" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

/// Main configuration structure
///
/// Passed explicitly into every entry point; there is no process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Master switch. When false blocks are emitted uncompressed and the
    /// manifest is never consulted.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Serve precomputed bundles from the manifest
    #[serde(default)]
    pub offline_enabled: bool,

    #[serde(default)]
    pub offline_context: OfflineContexts,

    #[serde(default)]
    pub offline: OfflineConfig,

    /// Template directories, searched in order
    #[serde(default)]
    pub template_roots: Vec<PathBuf>,

    /// Application directories; each contributes `<app>/templates`
    #[serde(default)]
    pub app_dirs: Vec<PathBuf>,

    /// Encoding label used to decode template files
    #[serde(default = "default_charset")]
    pub file_charset: String,

    /// Template extensions considered by the generator
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// URL prefix the storage root is served under
    #[serde(default = "default_url")]
    pub url: String,

    /// Storage root directory
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Cache directory below the storage root
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default)]
    pub compressor: CompressorKind,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            offline_enabled: false,
            offline_context: OfflineContexts::default(),
            offline: OfflineConfig::default(),
            template_roots: Vec::new(),
            app_dirs: Vec::new(),
            file_charset: default_charset(),
            extensions: default_extensions(),
            url: default_url(),
            root: default_root(),
            output_dir: default_output_dir(),
            compressor: CompressorKind::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_charset() -> String {
    "utf-8".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["html".to_string()]
}

fn default_url() -> String {
    "/media/".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_dir() -> String {
    "CACHE".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PrecompressResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PrecompressResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (PRECOMPRESS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Storage path of the manifest document
    pub fn manifest_path(&self) -> String {
        format!("{}/manifest.json", self.output_dir.trim_end_matches('/'))
    }

    /// Contexts `template` must be rendered under during generation
    pub fn contexts_for(&self, template: &str) -> &[RenderContext] {
        match self.offline.variants.get(template) {
            Some(variants) if !variants.is_empty() => variants,
            _ => &self.offline_context.0,
        }
    }

    /// Whether the generator considers a template with this extension
    pub fn accepts_extension(&self, extension: Option<&str>) -> bool {
        extension.is_some_and(|ext| {
            self.extensions
                .iter()
                .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
    }

    /// Resolve `file_charset` to an encoding
    pub fn charset(&self) -> Result<&'static encoding_rs::Encoding, ConfigError> {
        encoding_rs::Encoding::for_label(self.file_charset.trim().as_bytes()).ok_or_else(|| {
            ConfigError::UnknownCharset {
                label: self.file_charset.clone(),
            }
        })
    }

    /// Make relative directories relative to `base` (the config file's directory)
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let absolutize = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.template_roots = self.template_roots.into_iter().map(absolutize).collect();
        self.app_dirs = self.app_dirs.into_iter().map(absolutize).collect();
        self.root = absolutize(self.root);
        self
    }
}
