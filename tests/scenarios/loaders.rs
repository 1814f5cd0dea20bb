//! Scenario: Finding Templates
//!
//! Journey: A site keeps templates in a project directory and inside apps.
//!
//! Success Criteria:
//! - The cached loader is unwrapped into filesystem then app-directory loaders
//! - Templates from app directories are compressed like any other
//! - Template files are decoded with the configured charset

use std::sync::Arc;

use precompress::config::Verbosity;
use precompress::domain::ports::NoopEventSink;
use precompress::infrastructure::LoaderChain;
use precompress::presentation::factory;
use precompress::{GenerateOptions, RenderContext};

use crate::common::*;

/// SCENARIO: the configured loaders flatten to filesystem, then app directories
#[test]
fn scenario_get_loaders_unwraps_cached_loader() {
    let env = TestEnv::new();
    let loader = factory::create_loader(&env.config).unwrap();

    let loaders = LoaderChain::new(vec![loader]).flatten();

    let names: Vec<&str> = loaders.iter().map(|l| l.name()).collect();
    assert_eq!(names, vec!["filesystem", "app_directories"]);
}

/// SCENARIO: app templates are enumerated and compressed
#[test]
fn scenario_app_directory_templates_are_compressed() {
    let mut env = TestEnv::new();
    let app = env.path("apps/blog");
    std::fs::create_dir_all(app.join("templates/blog")).unwrap();
    std::fs::write(app.join("templates/blog/post.html"), BASIC.templates[0].1).unwrap();
    env.config.app_dirs = vec![app];

    let (count, result) = env
        .generator()
        .generate_offline(&mut std::io::sink(), Verbosity::Quiet)
        .unwrap();

    assert_eq!(count, 1);
    assert_eq!(result, vec![BASIC.expected_markup()]);
    assert!(env
        .resolver()
        .render("blog/post.html", &RenderContext::new())
        .is_ok());
}

/// SCENARIO: the project template root shadows an app template of the same name
#[test]
fn scenario_template_root_shadows_app_template() {
    let mut env = TestEnv::with_templates(&[(
        "page.html",
        "{% compress js %}<script>var from = \"root\";</script>{% endcompress %}",
    )]);
    let app = env.path("apps/shop");
    std::fs::create_dir_all(app.join("templates")).unwrap();
    std::fs::write(
        app.join("templates/page.html"),
        "{% compress js %}<script>var from = \"app\";</script>{% endcompress %}",
    )
    .unwrap();
    env.config.app_dirs = vec![app];

    let report = env
        .generator()
        .generate(&GenerateOptions::new(), Arc::new(NoopEventSink))
        .unwrap();
    assert_eq!(report.count, 1);

    let bundle = report.rendered[0]
        .split("CACHE/")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .unwrap()
        .to_string();
    assert_eq!(env.read_static(&format!("CACHE/{}", bundle)), "var from = \"root\";");
}

/// SCENARIO: templates stored in a legacy charset are decoded before rendering
#[test]
fn scenario_file_charset_decodes_templates() {
    let mut env = TestEnv::new();
    env.config.file_charset = "latin1".to_string();
    let mut bytes = b"{% compress js %}<script>var name = \"caf".to_vec();
    bytes.push(0xE9);
    bytes.extend_from_slice(b"\";</script>{% endcompress %}");
    std::fs::write(env.template_path("latin.html"), bytes).unwrap();

    let report = env
        .generator()
        .generate(&GenerateOptions::new(), Arc::new(NoopEventSink))
        .unwrap();
    assert_eq!(report.count, 1);

    let rendered = env
        .resolver()
        .render("latin.html", &RenderContext::new())
        .unwrap();
    let bundle = rendered
        .split("src=\"/media/")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .unwrap()
        .to_string();
    assert_eq!(env.read_static(&bundle), "var name = \"café\";");
}
