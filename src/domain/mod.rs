//! Domain Layer
//!
//! Pure logic of the offline compressor without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Template, AssetBlock, BundleReference, Manifest
//! - `value_objects/` - AssetKind, Fingerprint, RenderContext
//! - `services/` - Fingerprinter, hunk extraction
//! - `ports/` - Storage, template loading/rendering, compression, events
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
