//! Offline Generator Module
//!
//! Renders every template in scope under each of its contexts, stores the
//! compress blocks as bundles and swaps in a new manifest.
//!
//! ## Structure
//!
//! - `options` - Run options (`GenerateOptions`)
//! - `result` - Run report (`GenerationReport`)
//! - `use_case` - The generator itself (`OfflineGenerator`)
//!
//! ## Usage
//!
//! ```ignore
//! use precompress::application::generator::{GenerateOptions, OfflineGenerator};
//!
//! let generator = OfflineGenerator::new(config, storage, loader, engine, compressor)?;
//! let report = generator.generate(&GenerateOptions::new(), sink)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::GenerationReport;
pub use use_case::OfflineGenerator;
