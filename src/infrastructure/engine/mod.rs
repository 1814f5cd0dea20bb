//! Mini template engine
//!
//! A compact tag-based engine that drives offline generation and
//! runtime rendering. Supported syntax:
//!
//! - `{{ var }}`, `{{ user.name }}` and `{{ block.super }}`
//! - `{% if var %}`, `{% if not var %}`, `{% if var == "lit" %}`, `{% if var != "lit" %}`
//!   with optional `{% else %}` and a closing `{% endif %}`
//! - `{% include "name" %}`
//! - `{% extends "name" %}` (first tag only) with `{% block name %}...{% endblock %}`
//! - `{% compress js|css %}...{% endcompress %}`
//! - `{% load ... %}` (accepted and ignored) and `{# comments #}`
//!
//! Variables are substituted verbatim; there is no autoescaping.

mod render;
mod syntax;

use std::sync::Arc;

use crate::domain::entities::Template;
use crate::domain::ports::{BlockHandler, TemplateEngine, TemplateLoader, TemplateRenderError};
use crate::domain::value_objects::RenderContext;

use render::Renderer;

/// Maximum combined include/extends nesting before rendering gives up
pub const DEFAULT_MAX_DEPTH: usize = 16;

pub struct MiniTemplateEngine {
    loader: Arc<dyn TemplateLoader>,
    max_depth: usize,
}

impl MiniTemplateEngine {
    /// `loader` resolves `include` and `extends` targets
    pub fn new(loader: Arc<dyn TemplateLoader>) -> Self {
        Self {
            loader,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub(crate) fn load(&self, name: &str) -> Result<Template, TemplateRenderError> {
        self.loader
            .locate(name)
            .map_err(|e| TemplateRenderError::Load {
                name: name.to_string(),
                message: e.to_string(),
            })?
            .ok_or_else(|| TemplateRenderError::NotFound {
                name: name.to_string(),
            })
    }
}

impl TemplateEngine for MiniTemplateEngine {
    /// Parses `template` itself; `extends` and `include` targets are not followed
    fn validate(&self, template: &Template) -> Result<(), TemplateRenderError> {
        syntax::parse(template.name(), template.source()).map(|_| ())
    }

    fn render(
        &self,
        template: &Template,
        context: &RenderContext,
        blocks: &mut dyn BlockHandler,
    ) -> Result<String, TemplateRenderError> {
        Renderer::new(self, context, blocks, self.max_depth).render_template(template, 0)
    }
}
