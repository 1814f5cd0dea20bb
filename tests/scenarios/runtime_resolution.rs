//! Scenario: Serving Pages From The Offline Manifest
//!
//! Journey: A deployed site renders templates while offline mode is on.
//!
//! Steps:
//! 1. Render before generation ran - must fail loudly
//! 2. Generate, then render the same template under several contexts
//! 3. Switch offline mode off and render without a manifest
//!
//! Success Criteria:
//! - A miss is an OfflineGenerationError naming what is missing
//! - Context changes that alter block content change the lookup key
//! - Disabled mode never touches the manifest

use precompress::config::{ScopedConfig, Verbosity};
use precompress::presentation::factory;
use precompress::{
    AssetKind, OfflineGenerationError, OfflineMode, PrecompressError, RenderContext,
};

use crate::common::*;

fn generate(env: &TestEnv) -> (usize, Vec<String>) {
    env.generator()
        .generate_offline(&mut std::io::sink(), Verbosity::Quiet)
        .expect("offline generation should succeed")
}

fn condition(value: &str) -> RenderContext {
    RenderContext::new().with("condition", value)
}

/// SCENARIO: rendering before generation raises OfflineGenerationError
#[test]
fn scenario_render_without_compressing_raises() {
    let env = TestEnv::with_templates(BASIC.templates);

    let err = env
        .resolver()
        .render(ENTRY_TEMPLATE, &RenderContext::new())
        .unwrap_err();

    assert!(
        matches!(
            err,
            PrecompressError::OfflineGeneration(OfflineGenerationError::ManifestMissing { .. })
        ),
        "unexpected error: {}",
        err
    );
}

/// SCENARIO: resolve returns the recorded bundle references
#[test]
fn scenario_resolve_returns_references() {
    let env = TestEnv::with_templates(BASIC.templates);
    generate(&env);

    let references = env
        .resolver()
        .resolve(ENTRY_TEMPLATE, &RenderContext::new())
        .unwrap();

    assert_eq!(references.len(), 1);
    assert_eq!(references[0].kind(), AssetKind::Script);
    assert_eq!(references[0].url(), BASIC.expected_url());
}

/// SCENARIO: editing a template after generation is a miss, not a stale hit
#[test]
fn scenario_edited_template_misses() {
    let env = TestEnv::with_templates(BASIC.templates);
    generate(&env);

    env.write_template(
        ENTRY_TEMPLATE,
        "{% compress js %}<script>alert(\"edited\");</script>{% endcompress %}\n",
    );

    let err = env
        .resolver()
        .render(ENTRY_TEMPLATE, &RenderContext::new())
        .unwrap_err();
    match err {
        PrecompressError::OfflineGeneration(OfflineGenerationError::MissingEntry {
            template,
            ..
        }) => assert_eq!(template, ENTRY_TEMPLATE),
        other => panic!("expected MissingEntry, got {}", other),
    }
}

/// SCENARIO: a context that was never generated misses
#[test]
fn scenario_ungenerated_context_misses() {
    let mut env = TestEnv::with_templates(CONDITION.templates);
    env.set_contexts(vec![condition("red")]);
    generate(&env);

    let resolver = env.resolver();
    assert!(resolver.render(ENTRY_TEMPLATE, &condition("red")).is_ok());

    let err = resolver
        .render(ENTRY_TEMPLATE, &condition("blue"))
        .unwrap_err();
    assert!(matches!(
        err,
        PrecompressError::OfflineGeneration(OfflineGenerationError::MissingEntry { .. })
    ));
}

/// SCENARIO: per-template variants generate one entry per context
#[test]
fn scenario_variants_cover_every_branch() {
    let mut env = TestEnv::with_templates(CONDITION.templates);
    env.config.offline.variants.insert(
        ENTRY_TEMPLATE.to_string(),
        vec![condition("red"), condition("blue")],
    );

    let (count, result) = generate(&env);
    assert_eq!(count, 2);
    assert_eq!(result.len(), 2);

    let resolver = env.resolver();
    assert_eq!(
        resolver.render(ENTRY_TEMPLATE, &condition("red")).unwrap(),
        format!("{}\n", CONDITION.expected_markup())
    );
    assert_eq!(
        resolver.render(ENTRY_TEMPLATE, &condition("blue")).unwrap(),
        format!(
            "<script type=\"text/javascript\" src=\"/media/CACHE/js/{}.js\"></script>\n",
            CONDITION_BLUE_HASH
        )
    );
}

/// SCENARIO: with offline mode off, blocks render as written and no manifest is read
#[test]
fn scenario_disabled_mode_passes_blocks_through() {
    let mut env = TestEnv::with_templates(BASIC.templates);

    {
        let mut scoped = ScopedConfig::new(&mut env.config);
        scoped.offline_enabled = false;

        let resolver = factory::create_resolver(&scoped).unwrap();
        assert_eq!(resolver.mode(), OfflineMode::Disabled);

        let rendered = resolver
            .render(ENTRY_TEMPLATE, &RenderContext::new())
            .unwrap();
        assert_eq!(
            rendered,
            "\n<script type=\"text/javascript\">\n    alert(\"Basic test\");\n</script>\n\n"
        );
        assert!(!env_manifest_exists(&scoped.root));
    }

    assert!(env.config.offline_enabled, "scope restores the setting");
}

fn env_manifest_exists(root: &std::path::Path) -> bool {
    root.join("CACHE/manifest.json").exists()
}

/// SCENARIO: the resolver keeps its manifest until reloaded
#[test]
fn scenario_resolver_caches_manifest_until_reload() {
    let env = TestEnv::with_templates(BASIC.templates);
    generate(&env);

    let resolver = env.resolver();
    resolver
        .render(ENTRY_TEMPLATE, &RenderContext::new())
        .unwrap();

    env.remove_manifest();
    assert!(resolver
        .render(ENTRY_TEMPLATE, &RenderContext::new())
        .is_ok());

    resolver.reload();
    assert!(resolver
        .render(ENTRY_TEMPLATE, &RenderContext::new())
        .is_err());
}
