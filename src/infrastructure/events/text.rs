//! Text Event Sink
//!
//! Human-readable progress lines. `Normal` prints the summary, `Verbose`
//! adds one line per template and written bundle, `Debug` adds reused
//! bundles.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::ports::{GenerationEvent, GenerationEventSink};

/// Writes to any `Write`, including a borrowed one (`&mut Vec<u8>`)
pub struct TextEventSink<'w> {
    writer: Mutex<Box<dyn Write + Send + 'w>>,
    verbosity: Verbosity,
}

impl<'w> TextEventSink<'w> {
    pub fn stderr(verbosity: Verbosity) -> Self {
        Self::with_writer(io::stderr(), verbosity)
    }

    pub fn with_writer<W: Write + Send + 'w>(writer: W, verbosity: Verbosity) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbosity,
        }
    }

    fn line(&self, message: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", message);
        }
    }
}

/// Format `event` as a log line, or `None` if `verbosity` hides it
pub(crate) fn format_event(event: &GenerationEvent, verbosity: Verbosity) -> Option<String> {
    let required = match event {
        GenerationEvent::Completed { .. } | GenerationEvent::ManifestWritten { .. } => {
            Verbosity::Normal
        }
        GenerationEvent::Started { .. }
        | GenerationEvent::TemplateSkipped { .. }
        | GenerationEvent::Rendered { .. }
        | GenerationEvent::BundleWritten { .. } => Verbosity::Verbose,
        GenerationEvent::BundleReused { .. } => Verbosity::Debug,
    };
    if verbosity < required {
        return None;
    }

    Some(match event {
        GenerationEvent::Started { template_count } => {
            format!("Considering {} template(s)", template_count)
        }
        GenerationEvent::TemplateSkipped { template, reason } => {
            format!("Skipped {}: {}", template, reason)
        }
        GenerationEvent::Rendered {
            template,
            context,
            block_count,
        } => format!(
            "Rendered {} with context {} ({} block(s))",
            template, context, block_count
        ),
        GenerationEvent::BundleWritten { url } => format!("  -> {}", url),
        GenerationEvent::BundleReused { url } => format!("  = {}", url),
        GenerationEvent::ManifestWritten { path, entry_count } => {
            format!("Wrote {} ({} entries)", path, entry_count)
        }
        GenerationEvent::Completed { count, .. } => {
            format!("done\nCompressed {} block(s)", count)
        }
    })
}

impl GenerationEventSink for TextEventSink<'_> {
    fn on_event(&self, event: GenerationEvent) {
        if let Some(line) = format_event(&event, self.verbosity) {
            self.line(line);
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }
}
