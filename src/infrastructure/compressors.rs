//! Compressor implementations
//!
//! - `IdentityCompressor` - passes bundles through unchanged
//! - `WhitespaceCompressor` - trims every line and drops blank ones

use std::sync::Arc;

use crate::config::CompressorKind;
use crate::domain::ports::{CompressionError, Compressor};
use crate::domain::value_objects::AssetKind;

pub struct IdentityCompressor;

impl Compressor for IdentityCompressor {
    fn name(&self) -> &str {
        "identity"
    }

    fn compress(&self, content: &[u8], _kind: AssetKind) -> Result<Vec<u8>, CompressionError> {
        Ok(content.to_vec())
    }
}

pub struct WhitespaceCompressor;

impl Compressor for WhitespaceCompressor {
    fn name(&self) -> &str {
        "whitespace"
    }

    fn compress(&self, content: &[u8], kind: AssetKind) -> Result<Vec<u8>, CompressionError> {
        let text = std::str::from_utf8(content).map_err(|e| {
            CompressionError::new(self.name(), format!("{} bundle is not UTF-8: {}", kind, e))
        })?;

        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Ok(lines.join("\n").into_bytes())
    }
}

/// Build the compressor selected in config
pub fn create_compressor(kind: CompressorKind) -> Arc<dyn Compressor> {
    match kind {
        CompressorKind::Identity => Arc::new(IdentityCompressor),
        CompressorKind::Whitespace => Arc::new(WhitespaceCompressor),
    }
}
