//! Generation Event Port
//!
//! Provides an observable interface for offline generation runs.
//! Enables progress reporting, JSON event streams, and debugging.

/// Event emitted during an offline generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationEvent {
    /// Templates were enumerated
    Started { template_count: usize },

    /// Template has no compress blocks (or an excluded extension)
    TemplateSkipped { template: String, reason: String },

    /// A template+context combination rendered and produced blocks
    Rendered {
        template: String,
        context: String,
        block_count: usize,
    },

    /// A new bundle file was written
    BundleWritten { url: String },

    /// An existing bundle with the same fingerprint was reused
    BundleReused { url: String },

    /// The manifest was swapped into place
    ManifestWritten { path: String, entry_count: usize },

    /// Run completed
    Completed {
        count: usize,
        written: usize,
        reused: usize,
    },
}

/// Trait for receiving generation events
///
/// Implementations can be:
/// - TextEventSink: Human-readable log lines
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait GenerationEventSink: Send + Sync {
    fn on_event(&self, event: GenerationEvent);

    /// Check if this sink wants per-template and per-bundle events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl GenerationEventSink for NoopEventSink {
    fn on_event(&self, _event: GenerationEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
