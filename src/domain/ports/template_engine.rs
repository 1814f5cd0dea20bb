//! TemplateEngine port
//!
//! Rendering is delegated to the engine. Whenever the engine reaches a
//! compress block it hands the rendered block to a `BlockHandler` and splices
//! the handler's return value into the output in place of the block.

use crate::domain::entities::{AssetBlock, Template};
use crate::domain::value_objects::RenderContext;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TemplateRenderError {
    #[error("template '{name}' not found")]
    NotFound { name: String },

    #[error("syntax error in '{template}' line {line}: {message}")]
    Syntax {
        template: String,
        line: usize,
        message: String,
    },

    #[error("failed to load '{name}': {message}")]
    Load { name: String, message: String },

    #[error("'{template}' exceeds the maximum include/extends depth")]
    Recursion { template: String },
}

pub trait BlockHandler {
    fn handle_block(&mut self, block: AssetBlock) -> String;
}

/// Closure adapter
impl<F: FnMut(AssetBlock) -> String> BlockHandler for F {
    fn handle_block(&mut self, block: AssetBlock) -> String {
        self(block)
    }
}

pub trait TemplateEngine: Send + Sync {
    /// Check `template` for syntax errors without rendering it
    fn validate(&self, _template: &Template) -> Result<(), TemplateRenderError> {
        Ok(())
    }

    fn render(
        &self,
        template: &Template,
        context: &RenderContext,
        blocks: &mut dyn BlockHandler,
    ) -> Result<String, TemplateRenderError>;
}
