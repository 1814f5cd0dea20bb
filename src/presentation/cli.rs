//! CLI Argument Parsing
//!
//! Global flags (`--config`, `--json`, `-v`) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::domain::value_objects::RenderContext;

/// Precompress - offline asset compressor
#[derive(Parser, Debug)]
#[command(name = "precompress")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./precompress.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render every template and write bundles plus a fresh manifest
    Compress {
        /// Run even when compression or offline mode is disabled
        #[arg(short, long)]
        force: bool,

        /// Template extensions to consider (repeatable; replaces the config)
        #[arg(short, long = "extension", value_name = "EXT")]
        extensions: Vec<String>,
    },

    /// Print the bundle URLs recorded for a template render
    Resolve {
        /// Template name, as seen by the loaders
        template: String,

        /// Context variable (`key=value`, value parsed as JSON when valid)
        #[arg(short, long = "context", value_name = "KEY=VALUE")]
        context: Vec<String>,
    },

    /// Render a template the way it is served
    Render {
        template: String,

        #[arg(short, long = "context", value_name = "KEY=VALUE")]
        context: Vec<String>,
    },

    /// Print the current manifest
    Manifest,
}

/// Build a render context from `key=value` pairs
pub fn parse_context(pairs: &[String]) -> Result<RenderContext, String> {
    let mut context = RenderContext::new();
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| format!("invalid context '{}', expected KEY=VALUE", pair))?;
        let value = serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        context.insert(key.trim(), value);
    }
    Ok(context)
}
