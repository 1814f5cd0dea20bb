//! Precompress CLI - offline asset compressor
//!
//! Usage: precompress [--config PATH] [--json] [-v...] <COMMAND>
//!
//! Commands:
//!   compress  Render templates, write bundles and a fresh manifest
//!   resolve   Print the bundles recorded for a template render
//!   render    Render a template as it would be served
//!   manifest  Print the current manifest

mod commands;

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use precompress::config::{Config, ConfigWarning, Verbosity};
use precompress::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let verbosity = if cli.verbose > 0 {
        Verbosity::from_level(cli.verbose.saturating_add(1))
    } else {
        config.output.verbosity
    };

    match cli.command {
        Commands::Compress { force, extensions } => {
            commands::compress::cmd_compress(&config, force, extensions, cli.json, verbosity)
        }
        Commands::Resolve { template, context } => {
            commands::resolve::cmd_resolve(&config, &template, &context, cli.json)
        }
        Commands::Render { template, context } => {
            commands::resolve::cmd_render(&config, &template, &context)
        }
        Commands::Manifest => commands::manifest::cmd_manifest(&config, cli.json),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit else {
        let cwd = std::env::current_dir()?;
        return Ok(Config::load_or_default(Some(&cwd)));
    };

    let (config, warnings) = Config::load_with_warnings(path)?;
    for warning in &warnings {
        print_warning(warning);
    }
    Ok(config.with_env_overrides())
}

fn print_warning(warning: &ConfigWarning) {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => eprintln!(
            "warning: unknown config key '{}' in {} (did you mean '{}'?)",
            warning.key, location, suggestion
        ),
        None => eprintln!(
            "warning: unknown config key '{}' in {}",
            warning.key, location
        ),
    }
}
