//! Generation Options

/// Options for an offline generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Run even if `enabled` or `offline_enabled` is false
    pub force: bool,
    /// Replaces the configured `extensions` when set
    pub extensions: Option<Vec<String>>,
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = Some(extensions);
        self
    }
}
