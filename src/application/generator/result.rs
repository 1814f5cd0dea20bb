//! Generation Report

/// Result of a completed offline generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Distinct template+context combinations that produced blocks
    pub count: usize,
    /// Bundle markup for every block, in render order
    pub rendered: Vec<String>,
    /// Bundle files written by this run
    pub written: usize,
    /// Bundle files that already existed
    pub reused: usize,
    /// Entries in the new manifest
    pub entries: usize,
}

impl GenerationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `(count, rendered)` pair reported to callers of `generate_offline`
    pub fn into_parts(self) -> (usize, Vec<String>) {
        (self.count, self.rendered)
    }
}
