//! Output Rendering
//!
//! Formats command results for the terminal or for scripts.

use crate::application::manifest_to_json;
use crate::domain::entities::{BundleReference, Manifest};
use crate::error::ManifestError;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// One line per bundle (`kind url`), or a JSON array
pub fn format_references(references: &[BundleReference], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => references
            .iter()
            .map(|r| format!("{}\t{}", r.kind(), r.url()))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let json: Vec<serde_json::Value> = references
                .iter()
                .map(|r| serde_json::json!({ "kind": r.kind().as_str(), "url": r.url() }))
                .collect();
            serde_json::Value::Array(json).to_string()
        }
    }
}

/// Text lists `fingerprint kind url` rows; JSON is the persisted document
pub fn format_manifest(manifest: &Manifest, format: OutputFormat) -> Result<String, ManifestError> {
    match format {
        OutputFormat::Json => Ok(manifest_to_json(manifest)?.trim_end().to_string()),
        OutputFormat::Text if manifest.is_empty() => Ok("(empty manifest)".to_string()),
        OutputFormat::Text => {
            let mut lines = Vec::new();
            for (fp, bundles) in manifest.iter() {
                for bundle in bundles {
                    lines.push(format!("{}  {:<6}  {}", fp, bundle.kind().as_str(), bundle.url()));
                }
            }
            Ok(lines.join("\n"))
        }
    }
}
