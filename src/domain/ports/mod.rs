//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod compressor;
pub mod generation_events;
pub mod storage;
pub mod template_engine;
pub mod template_loader;

pub use compressor::{CompressionError, Compressor};
pub use generation_events::{GenerationEvent, GenerationEventSink, NoopEventSink};
pub use storage::{Storage, StorageError, StorageLock, StorageResult};
pub use template_engine::{BlockHandler, TemplateEngine, TemplateRenderError};
pub use template_loader::{LoaderError, TemplateLoader};
