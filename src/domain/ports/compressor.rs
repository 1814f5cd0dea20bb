//! Compressor port - pluggable minification of a resolved bundle

use crate::domain::value_objects::AssetKind;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{compressor}: {message}")]
pub struct CompressionError {
    pub compressor: String,
    pub message: String,
}

impl CompressionError {
    pub fn new(compressor: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            compressor: compressor.into(),
            message: message.into(),
        }
    }
}

/// `compress(bytes, kind) -> bytes`
pub trait Compressor: Send + Sync {
    fn name(&self) -> &str;

    fn compress(&self, content: &[u8], kind: AssetKind) -> Result<Vec<u8>, CompressionError>;
}
