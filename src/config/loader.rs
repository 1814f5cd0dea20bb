//! Configuration loading and environment overrides

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, PrecompressResult};

use super::types::{Config, Verbosity};

/// Project config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "precompress.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative directories in the file are resolved against the file's directory.
pub fn load_with_warnings(path: &Path) -> PrecompressResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        file: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    let base = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    Ok((config.resolve_paths(base), warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    load_or_default_from(project_root, dirs::config_dir(), &mut std::io::stderr())
}

/// Try `<project_root>/precompress.toml`, then `<user_config_dir>/precompress/config.toml`.
///
/// A file that exists but fails to load is reported to `warnings` and skipped.
pub(crate) fn load_or_default_from<W: Write>(
    project_root: Option<&Path>,
    user_config_dir: Option<PathBuf>,
    warnings: &mut W,
) -> Config {
    let candidates = [
        project_root.map(|root| root.join(CONFIG_FILE_NAME)),
        user_config_dir.map(|dir| dir.join("precompress/config.toml")),
    ];

    for path in candidates.into_iter().flatten() {
        if !path.exists() {
            continue;
        }
        match Config::load(&path) {
            Ok(config) => return with_env_overrides(config),
            Err(e) => {
                let _ = writeln!(warnings, "Warning: {}", e);
                let _ = writeln!(warnings, "Ignoring {}", path.display());
            }
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (PRECOMPRESS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok(), &mut std::io::stderr())
}

/// Apply overrides from an arbitrary variable source.
///
/// Invalid values are reported to `warnings` and leave the setting unchanged.
pub fn apply_overrides<F, W>(mut config: Config, var: F, warnings: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    if let Some(value) = var("PRECOMPRESS_ENABLED") {
        match parse_bool(&value) {
            Some(enabled) => config.enabled = enabled,
            None => warn_invalid(warnings, "PRECOMPRESS_ENABLED", &value, BOOL_VALUES),
        }
    }

    if let Some(value) = var("PRECOMPRESS_OFFLINE") {
        match parse_bool(&value) {
            Some(offline) => config.offline_enabled = offline,
            None => warn_invalid(warnings, "PRECOMPRESS_OFFLINE", &value, BOOL_VALUES),
        }
    }

    if let Some(value) = var("PRECOMPRESS_VERBOSITY") {
        match Verbosity::parse(&value) {
            Some(verbosity) => config.output.verbosity = verbosity,
            None => warn_invalid(warnings, "PRECOMPRESS_VERBOSITY", &value, VERBOSITY_VALUES),
        }
    }

    if let Some(root) = var("PRECOMPRESS_ROOT") {
        config.root = PathBuf::from(root);
    }

    if let Some(url) = var("PRECOMPRESS_URL") {
        config.url = url;
    }

    config
}

const BOOL_VALUES: &[&str] = &["true", "false", "1", "0"];
const VERBOSITY_VALUES: &[&str] = &["quiet", "normal", "verbose", "debug"];

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn warn_invalid<W: Write>(out: &mut W, var: &str, value: &str, valid: &[&str]) {
    let suggestion = closest(&value.to_lowercase(), valid)
        .map(|s| format!(". Did you mean '{}'?", s))
        .unwrap_or_default();
    let _ = writeln!(out, "Warning: Invalid {} value '{}'{}", var, value, suggestion);
    let _ = writeln!(out, "Valid values: {}", valid.join(", "));
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "enabled",
        "offline_enabled",
        "offline_context",
        "offline",
        "variants",
        "template_roots",
        "app_dirs",
        "file_charset",
        "extensions",
        "url",
        "root",
        "output_dir",
        "compressor",
        "output",
        "verbosity",
    ];
    closest(unknown, CANDIDATES).map(str::to_string)
}

/// Closest candidate within two edits (exact matches excluded)
fn closest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|c| (*c, levenshtein(input, c)))
        .filter(|(_, dist)| *dist > 0 && *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(c, _)| c)
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b_bytes = b.as_bytes();
    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a.as_bytes().iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
