//! Scenario: Regenerating After Changes
//!
//! Journey: A site owner reruns offline generation on every deploy.
//!
//! Steps:
//! 1. Generate once, then again with nothing changed
//! 2. Change a template and regenerate
//! 3. Break a template and regenerate
//!
//! Success Criteria:
//! - Unchanged input gives a byte-identical manifest and reuses bundles
//! - Entries for content that no longer renders disappear
//! - A failed run leaves the previous manifest intact

use std::sync::Arc;

use precompress::domain::ports::NoopEventSink;
use precompress::{GenerateOptions, GenerationReport, PrecompressError, RenderContext};

use crate::common::*;

fn generate(env: &TestEnv) -> GenerationReport {
    env.generator()
        .generate(&GenerateOptions::new(), Arc::new(NoopEventSink))
        .expect("offline generation should succeed")
}

/// SCENARIO: a second run over unchanged templates changes nothing
#[test]
fn scenario_regeneration_is_idempotent() {
    let env = TestEnv::with_templates(BASIC.templates);

    let first = generate(&env);
    let manifest_before = std::fs::read_to_string(env.manifest_file()).unwrap();
    let second = generate(&env);
    let manifest_after = std::fs::read_to_string(env.manifest_file()).unwrap();

    assert_eq!(manifest_before, manifest_after);
    assert_eq!(first.rendered, second.rendered);
    assert_eq!((first.written, first.reused), (1, 0));
    assert_eq!((second.written, second.reused), (0, 1));
}

/// SCENARIO: the manifest is replaced wholesale, so stale keys disappear
#[test]
fn scenario_changed_template_drops_stale_entry() {
    let env = TestEnv::with_templates(BASIC.templates);
    generate(&env);
    let old_key = env.manifest().iter().next().map(|(k, _)| k.clone()).unwrap();

    env.write_template(
        ENTRY_TEMPLATE,
        "{% compress js %}<script>alert(\"changed\");</script>{% endcompress %}\n",
    );
    generate(&env);

    let manifest = env.manifest();
    assert_eq!(manifest.len(), 1);
    assert!(!manifest.contains(&old_key));
}

/// SCENARIO: a render failure aborts the run and keeps the last good manifest
#[test]
fn scenario_failed_run_keeps_previous_manifest() {
    let env = TestEnv::with_templates(BASIC.templates);
    generate(&env);
    let before = std::fs::read_to_string(env.manifest_file()).unwrap();

    env.write_template(
        "broken.html",
        "{% compress js %}{% include \"missing.html\" %}{% endcompress %}\n",
    );
    let err = env
        .generator()
        .generate(&GenerateOptions::new(), Arc::new(NoopEventSink))
        .unwrap_err();
    assert!(
        matches!(err, PrecompressError::TemplateRender { ref template, .. } if template == "broken.html"),
        "unexpected error: {}",
        err
    );

    let after = std::fs::read_to_string(env.manifest_file()).unwrap();
    assert_eq!(before, after);
    assert!(!env.static_path("CACHE/manifest.json.tmp").exists());

    env.resolver()
        .render(ENTRY_TEMPLATE, &RenderContext::new())
        .expect("previous manifest still serves the page");
}

/// SCENARIO: a successful run leaves no temporary manifest behind
#[test]
fn scenario_manifest_swap_leaves_no_temporary_file() {
    let env = TestEnv::with_templates(BASIC.templates);
    generate(&env);

    assert!(env.manifest_file().exists());
    assert!(!env.static_path("CACHE/manifest.json.tmp").exists());
}

/// SCENARIO: identical blocks in two templates share one bundle
#[test]
fn scenario_identical_blocks_share_a_bundle() {
    let env = TestEnv::with_templates(BASIC.templates);
    env.write_template("copy.html", BASIC.templates[0].1);

    let report = generate(&env);

    assert_eq!(report.count, 2);
    assert_eq!(report.entries, 1);
    assert_eq!((report.written, report.reused), (1, 1));
}

/// SCENARIO: a disabled compressor refuses to run unless forced
#[test]
fn scenario_disabled_compressor_needs_force() {
    let mut env = TestEnv::with_templates(BASIC.templates);
    env.config.enabled = false;

    let err = env
        .generator()
        .generate(&GenerateOptions::new(), Arc::new(NoopEventSink))
        .unwrap_err();
    assert!(matches!(err, PrecompressError::CompressorDisabled));
    assert!(!env.manifest_file().exists());

    let report = env
        .generator()
        .generate(&GenerateOptions::new().with_force(true), Arc::new(NoopEventSink))
        .unwrap();
    assert_eq!(report.count, 1);
}
