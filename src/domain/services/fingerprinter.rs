//! Fingerprinter
//!
//! Pure, deterministic identifiers for asset content. The same inputs give
//! the same fingerprint across runs and processes.

use sha2::{Digest, Sha256};

use crate::domain::entities::AssetBlock;
use crate::domain::value_objects::{AssetKind, Fingerprint};

/// Fingerprint of one resolved bundle: `sha256(kind ‖ 0x00 ‖ content)`.
pub fn fingerprint(kind: AssetKind, content: &[u8]) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(kind.as_str().as_bytes());
    hasher.update([0u8]);
    hasher.update(content);
    Fingerprint::from_digest(&hasher.finalize())
}

/// Fingerprint of the ordered block sequence a render produced.
///
/// This is the manifest key: the generator and the resolver both derive it
/// from the rendered blocks, so one lookup serves a whole render. Each block
/// is length-prefixed so that splitting content differently between blocks
/// changes the key.
pub fn sequence_fingerprint(blocks: &[AssetBlock]) -> Fingerprint {
    let mut hasher = Sha256::new();
    for block in blocks {
        hasher.update(block.kind().as_str().as_bytes());
        hasher.update([0u8]);
        hasher.update((block.content().len() as u64).to_le_bytes());
        hasher.update(block.content().as_bytes());
    }
    Fingerprint::from_digest(&hasher.finalize())
}
