//! Scenario: Offline Generation Of Template Sets
//!
//! Journey: A site owner precompresses every template before deploying.
//!
//! Steps:
//! 1. Site has one entry template per set, plus helpers it includes/extends
//! 2. Runs offline generation with the set's offline context
//! 3. Renders the entry template at request time
//!
//! Success Criteria:
//! - Exactly one (template, context) pair is compressed
//! - The bundle URL is content-addressed and stable
//! - The served page is the bundle markup plus the template's trailing newline

use precompress::config::Verbosity;

use crate::common::*;

fn offline_env(case: &OfflineCase) -> TestEnv {
    let mut env = TestEnv::with_templates(case.templates);
    env.set_contexts(vec![case.context()]);
    env
}

/// Generate, check the reported markup, then render through the resolver.
fn assert_offline_round_trip(case: &OfflineCase) {
    let env = offline_env(case);

    let (count, result) = env
        .generator()
        .generate_offline(&mut std::io::sink(), Verbosity::Quiet)
        .expect("offline generation should succeed");

    assert_eq!(count, 1, "exactly one template carries compress blocks");
    assert_eq!(result, vec![case.expected_markup()]);

    let rendered = env
        .resolver()
        .render(ENTRY_TEMPLATE, &case.context())
        .expect("render after generation should hit the manifest");
    assert_eq!(rendered, format!("{}\n", result.join("")));

    let bundle = format!("CACHE/js/{}.js", case.expected_hash);
    assert!(
        env.static_path(&bundle).exists(),
        "Expected bundle at {}",
        bundle
    );
}

/// SCENARIO: a single inline script block
#[test]
fn scenario_offline_basic() {
    assert_offline_round_trip(&BASIC);
}

/// SCENARIO: the compressed block extends its parent's block via block.super
#[test]
fn scenario_offline_block_super() {
    assert_offline_round_trip(&BLOCK_SUPER);
}

/// SCENARIO: the block's content depends on an if-branch of the offline context
#[test]
fn scenario_offline_condition() {
    assert_offline_round_trip(&CONDITION);
}

/// SCENARIO: the block's script comes from an included template
#[test]
fn scenario_offline_include() {
    assert_offline_round_trip(&INCLUDE);
}

/// SCENARIO: a variable from the offline context lands in the bundle
#[test]
fn scenario_offline_with_context() {
    assert_offline_round_trip(&WITH_CONTEXT);
}

/// SCENARIO: templates that do not parse are skipped, the rest still compress
#[test]
fn scenario_offline_error_handling() {
    assert_offline_round_trip(&ERROR_HANDLING);
}

/// SCENARIO: the bundle on disk is the minified concatenation of the hunks
#[test]
fn scenario_bundle_content_is_compressed() {
    let env = offline_env(&BASIC);
    env.generator()
        .generate_offline(&mut std::io::sink(), Verbosity::Quiet)
        .unwrap();

    let content = env.read_static(&format!("CACHE/js/{}.js", BASIC.expected_hash));
    assert_eq!(content, "alert(\"Basic test\");");
}

/// SCENARIO: the generation log reports progress at normal verbosity
#[test]
fn scenario_generation_log_reports_count() {
    let env = offline_env(&BASIC);
    let mut log = Vec::new();
    env.generator()
        .generate_offline(&mut log, Verbosity::Normal)
        .unwrap();

    let text = String::from_utf8(log).unwrap();
    assert!(
        text.contains("Compressed 1 block(s)"),
        "unexpected log:\n{}",
        text
    );
}
