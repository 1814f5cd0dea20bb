//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_kind;
mod context;
mod fingerprint;

pub use asset_kind::AssetKind;
pub use context::RenderContext;
pub use fingerprint::{Fingerprint, FingerprintParseError};
