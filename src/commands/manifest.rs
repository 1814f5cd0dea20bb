//! Manifest command handler

use anyhow::{bail, Result};

use precompress::config::Config;
use precompress::presentation::factory::create_manifest_repository;
use precompress::presentation::output::{format_manifest, OutputFormat};

pub fn cmd_manifest(config: &Config, json: bool) -> Result<()> {
    let repository = create_manifest_repository(config);
    let Some(manifest) = repository.load_existing()? else {
        bail!(
            "no manifest at {} - run `precompress compress` first",
            config.root.join(repository.path()).display()
        );
    };

    println!(
        "{}",
        format_manifest(&manifest, OutputFormat::from_json_flag(json))?
    );
    Ok(())
}
