//! Domain Entities
//!
//! - `Template` - A located template source
//! - `AssetBlock` - The literal content of one compress block after rendering
//! - `BundleReference` - Where a compressed bundle is served from
//! - `Manifest` - Fingerprint to bundle references, for one generation epoch

mod asset_block;
mod bundle;
mod manifest;
mod template;

pub use asset_block::AssetBlock;
pub use bundle::BundleReference;
pub use manifest::Manifest;
pub use template::Template;
