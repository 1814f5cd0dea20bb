//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `storage/` - Storage implementations (Local, Memory)
//! - `loaders/` - Template loaders and their composition
//! - `engine/` - The mini template engine
//! - `compressors` - Bundle compressors
//! - `events/` - Generation event sinks (text, JSON)

pub mod compressors;
pub mod engine;
pub mod events;
pub mod loaders;
pub mod storage;

// Re-export for convenience
pub use compressors::{create_compressor, IdentityCompressor, WhitespaceCompressor};
pub use engine::MiniTemplateEngine;
pub use events::{JsonEventSink, TextEventSink};
pub use loaders::{
    AppDirectoriesLoader, CachedLoader, FilesystemLoader, LoaderChain, MemoryLoader,
};
pub use storage::{LocalStorage, MemoryStorage};
