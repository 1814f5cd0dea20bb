//! Scoped configuration overrides
//!
//! Tests and embedders flip settings for the duration of a scope. The
//! original configuration is restored when the guard drops, including on
//! early return and unwinding.

use std::ops::{Deref, DerefMut};

use super::types::Config;

pub struct ScopedConfig<'a> {
    target: &'a mut Config,
    saved: Option<Config>,
}

impl<'a> ScopedConfig<'a> {
    /// Snapshot `target`; mutations through the guard are undone on drop
    pub fn new(target: &'a mut Config) -> Self {
        let saved = Some(target.clone());
        Self { target, saved }
    }
}

impl Deref for ScopedConfig<'_> {
    type Target = Config;

    fn deref(&self) -> &Config {
        self.target
    }
}

impl DerefMut for ScopedConfig<'_> {
    fn deref_mut(&mut self) -> &mut Config {
        self.target
    }
}

impl Drop for ScopedConfig<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            *self.target = saved;
        }
    }
}
