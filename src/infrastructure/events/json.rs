//! JSON Event Sink
//!
//! Outputs generation events as NDJSON for CI/automation consumption.

use crate::domain::ports::{GenerationEvent, GenerationEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl GenerationEventSink for JsonEventSink {
    fn on_event(&self, event: GenerationEvent) {
        let json = match event {
            GenerationEvent::Started { template_count } => serde_json::json!({
                "event": "start",
                "command": "compress",
                "template_count": template_count,
            }),

            GenerationEvent::TemplateSkipped { template, reason } => serde_json::json!({
                "event": "template_skipped",
                "command": "compress",
                "template": template,
                "reason": reason,
            }),

            GenerationEvent::Rendered {
                template,
                context,
                block_count,
            } => serde_json::json!({
                "event": "rendered",
                "command": "compress",
                "template": template,
                "context": context,
                "block_count": block_count,
            }),

            GenerationEvent::BundleWritten { url } => serde_json::json!({
                "event": "bundle_written",
                "command": "compress",
                "url": url,
            }),

            GenerationEvent::BundleReused { url } => serde_json::json!({
                "event": "bundle_reused",
                "command": "compress",
                "url": url,
            }),

            GenerationEvent::ManifestWritten { path, entry_count } => serde_json::json!({
                "event": "manifest_written",
                "command": "compress",
                "path": path,
                "entry_count": entry_count,
            }),

            GenerationEvent::Completed {
                count,
                written,
                reused,
            } => serde_json::json!({
                "event": "complete",
                "command": "compress",
                "status": "success",
                "count": count,
                "written": written,
                "reused": reused,
            }),
        };

        self.write_event(json);
    }
}
