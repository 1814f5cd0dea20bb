//! Golden output for the basic template set.

use insta::assert_snapshot;

use precompress::application::manifest_to_json;
use precompress::config::Verbosity;
use precompress::presentation::output::{format_manifest, format_references, OutputFormat};

use crate::common::*;

fn generated_env() -> TestEnv {
    let env = TestEnv::with_templates(BASIC.templates);
    env.generator()
        .generate_offline(&mut std::io::sink(), Verbosity::Quiet)
        .expect("offline generation should succeed");
    env
}

#[test]
fn manifest_document() {
    let env = generated_env();
    let text = std::fs::read_to_string(env.manifest_file()).unwrap();

    assert_eq!(text, manifest_to_json(&env.manifest()).unwrap());
    assert_snapshot!(text.trim_end(), @r#"
    {
      "f1922246667e": [
        {
          "kind": "script",
          "url": "/media/CACHE/js/a19e70c58eaa.js"
        }
      ]
    }
    "#);
}

#[test]
fn manifest_listing_text() {
    let env = generated_env();
    let listing = format_manifest(&env.manifest(), OutputFormat::Text).unwrap();

    assert_snapshot!(listing, @"f1922246667e  script  /media/CACHE/js/a19e70c58eaa.js");
}

#[test]
fn resolved_references_text() {
    let env = generated_env();
    let references = env
        .resolver()
        .resolve(ENTRY_TEMPLATE, &BASIC.context())
        .unwrap();

    assert_eq!(
        format_references(&references, OutputFormat::Text),
        "script\t/media/CACHE/js/a19e70c58eaa.js"
    );
}
