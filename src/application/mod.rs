//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `OfflineGenerator` - full regeneration of bundles and manifest
//! - `RuntimeResolver` - render-time manifest lookup
//!
//! ## Services
//!
//! - `BundleStore` - content-addressed bundle files
//! - `ManifestRepository` - manifest load and atomic replace

pub mod bundle_store;
pub mod generator;
pub mod manifest_repository;
pub mod resolver;

pub use bundle_store::{BundleError, BundleStore, StoredBundle};
pub use generator::{GenerateOptions, GenerationReport, OfflineGenerator};
pub use manifest_repository::{manifest_from_json, manifest_to_json, ManifestRepository};
pub use resolver::{OfflineMode, RuntimeResolver};
