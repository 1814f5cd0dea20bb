//! Event Sink Implementations
//!
//! Concrete implementations of GenerationEventSink:
//! - TextEventSink: human-readable log lines filtered by verbosity
//! - JsonEventSink: NDJSON output for CI/automation

mod json;
mod text;

pub use json::JsonEventSink;
pub use text::TextEventSink;
