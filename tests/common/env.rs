//! Test environment builder for isolated offline compression runs.
//!
//! A `TestEnv` owns a temp dir laid out like a small site:
//! - `templates/` is the only template root
//! - `static/` is the storage root, served under `/media/`

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use precompress::config::{Config, OfflineContexts};
use precompress::presentation::factory;
use precompress::{
    Manifest, ManifestRepository, OfflineGenerator, RenderContext, RuntimeResolver,
};

/// Result of running the precompress binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    pub root: TempDir,
    pub config: Config,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty site with offline compression switched on
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("templates")).expect("templates dir");
        std::fs::create_dir_all(root.path().join("static")).expect("static dir");

        let config = Config {
            enabled: true,
            offline_enabled: true,
            template_roots: vec![root.path().join("templates")],
            root: root.path().join("static"),
            ..Config::default()
        };

        Self {
            root,
            config,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_precompress")),
        }
    }

    /// Site preloaded with `templates`
    pub fn with_templates(templates: &[(&str, &str)]) -> Self {
        let env = Self::new();
        for (name, source) in templates {
            env.write_template(name, source);
        }
        env
    }

    /// Replace the offline contexts every template is rendered under
    pub fn set_contexts(&mut self, contexts: Vec<RenderContext>) {
        self.config.offline_context = OfflineContexts(contexts);
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn template_path(&self, name: &str) -> PathBuf {
        self.path("templates").join(name)
    }

    pub fn static_path(&self, relative: &str) -> PathBuf {
        self.path("static").join(relative)
    }

    pub fn write_template(&self, name: &str, source: &str) {
        write_file(&self.template_path(name), source);
    }

    pub fn write_static(&self, relative: &str, content: &str) {
        write_file(&self.static_path(relative), content);
    }

    pub fn read_static(&self, relative: &str) -> String {
        std::fs::read_to_string(self.static_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn generator(&self) -> OfflineGenerator {
        factory::create_generator(&self.config).expect("Failed to create generator")
    }

    pub fn resolver(&self) -> RuntimeResolver {
        factory::create_resolver(&self.config).expect("Failed to create resolver")
    }

    pub fn manifests(&self) -> ManifestRepository {
        factory::create_manifest_repository(&self.config)
    }

    pub fn manifest(&self) -> Manifest {
        self.manifests().load().expect("Failed to load manifest")
    }

    pub fn manifest_file(&self) -> PathBuf {
        self.static_path("CACHE/manifest.json")
    }

    /// Delete the manifest, leaving bundles in place
    pub fn remove_manifest(&self) {
        self.manifests().delete().expect("Failed to delete manifest");
    }

    /// Write `precompress.toml` pointing at this site, followed by `extra`
    pub fn write_config(&self, extra: &str) -> PathBuf {
        let path = self.path("precompress.toml");
        let content = format!(
            "enabled = true\noffline_enabled = true\ntemplate_roots = ['{}']\nroot = '{}'\n{}",
            self.path("templates").display(),
            self.path("static").display(),
            extra
        );
        write_file(&path, &content);
        path
    }

    /// Run the binary with `--config` pointing at this site
    pub fn run(&self, args: &[&str]) -> TestResult {
        let config = self.path("precompress.toml");
        if !config.exists() {
            self.write_config("");
        }

        let output = Command::new(&self.bin)
            .current_dir(self.root.path())
            .arg("--config")
            .arg(&config)
            .args(args)
            .env_remove("PRECOMPRESS_ENABLED")
            .env_remove("PRECOMPRESS_OFFLINE")
            .env_remove("PRECOMPRESS_VERBOSITY")
            .env_remove("PRECOMPRESS_ROOT")
            .env_remove("PRECOMPRESS_URL")
            .output()
            .expect("Failed to execute precompress");

        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
