//! Compress command handler
//!
//! Runs offline generation over every template in scope.

use anyhow::Result;

use precompress::application::GenerateOptions;
use precompress::config::{Config, Verbosity};
use precompress::presentation::{create_event_sink, create_generator};

/// Execute the compress command
pub fn cmd_compress(
    config: &Config,
    force: bool,
    extensions: Vec<String>,
    json: bool,
    verbosity: Verbosity,
) -> Result<()> {
    let generator = create_generator(config)?;

    let mut options = GenerateOptions::new().with_force(force);
    if !extensions.is_empty() {
        options = options.with_extensions(extensions);
    }

    let report = generator.generate(&options, create_event_sink(json, verbosity))?;

    if !json && verbosity >= Verbosity::Verbose {
        for markup in &report.rendered {
            eprintln!("  {}", markup);
        }
    }
    Ok(())
}
