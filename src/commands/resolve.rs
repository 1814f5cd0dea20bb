//! Resolve and render command handlers

use anyhow::{Context, Result};

use precompress::config::Config;
use precompress::presentation::output::{format_references, OutputFormat};
use precompress::presentation::{create_resolver, parse_context};

/// Print the bundles recorded for `template` under the given context
pub fn cmd_resolve(config: &Config, template: &str, context: &[String], json: bool) -> Result<()> {
    let context = parse_context(context).map_err(anyhow::Error::msg)?;
    let references = create_resolver(config)?
        .resolve(template, &context)
        .with_context(|| format!("resolving '{}'", template))?;

    println!(
        "{}",
        format_references(&references, OutputFormat::from_json_flag(json))
    );
    Ok(())
}

/// Print `template` rendered as it would be served
pub fn cmd_render(config: &Config, template: &str, context: &[String]) -> Result<()> {
    let context = parse_context(context).map_err(anyhow::Error::msg)?;
    let output = create_resolver(config)?
        .render(template, &context)
        .with_context(|| format!("rendering '{}'", template))?;

    print!("{}", output);
    Ok(())
}
