//! Node tree evaluation

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::entities::{AssetBlock, Template};
use crate::domain::ports::{BlockHandler, TemplateRenderError};
use crate::domain::value_objects::RenderContext;

use super::syntax::{parse, Condition, Node};
use super::MiniTemplateEngine;

/// Block bodies by name, most derived template first
type BlockStacks = HashMap<String, Vec<Vec<Node>>>;

/// The block being rendered and how far up its override stack we are
type CurrentBlock<'n> = Option<(&'n str, usize)>;

pub(super) struct Renderer<'a> {
    engine: &'a MiniTemplateEngine,
    context: &'a RenderContext,
    handler: &'a mut dyn BlockHandler,
    max_depth: usize,
}

impl<'a> Renderer<'a> {
    pub(super) fn new(
        engine: &'a MiniTemplateEngine,
        context: &'a RenderContext,
        handler: &'a mut dyn BlockHandler,
        max_depth: usize,
    ) -> Self {
        Self {
            engine,
            context,
            handler,
            max_depth,
        }
    }

    pub(super) fn render_template(
        &mut self,
        template: &Template,
        depth: usize,
    ) -> Result<String, TemplateRenderError> {
        if depth > self.max_depth {
            return Err(TemplateRenderError::Recursion {
                template: template.name().to_string(),
            });
        }

        let mut current = parse(template.name(), template.source())?;
        let mut stacks = BlockStacks::new();
        let mut depth = depth;

        while let Some(parent_name) = current.extends.take() {
            collect_blocks(&current.nodes, &mut stacks);
            depth += 1;
            if depth > self.max_depth {
                return Err(TemplateRenderError::Recursion {
                    template: parent_name,
                });
            }
            let parent = self.engine.load(&parent_name)?;
            current = parse(parent.name(), parent.source())?;
        }
        collect_blocks(&current.nodes, &mut stacks);

        let mut out = String::new();
        self.render_nodes(&current.nodes, &stacks, None, depth, &mut out)?;
        Ok(out)
    }

    fn render_nodes<'n>(
        &mut self,
        nodes: &'n [Node],
        stacks: &'n BlockStacks,
        block: CurrentBlock<'n>,
        depth: usize,
        out: &mut String,
    ) -> Result<(), TemplateRenderError> {
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Var(expr) if expr == "block.super" => {
                    if let Some((name, level)) = block {
                        if let Some(parent) = stacks.get(name).and_then(|s| s.get(level + 1)) {
                            self.render_nodes(parent, stacks, Some((name, level + 1)), depth, out)?;
                        }
                    }
                }
                Node::Var(expr) => out.push_str(&self.context.display(expr)),
                Node::If {
                    condition,
                    then,
                    otherwise,
                } => {
                    let branch = if self.evaluate(condition) { then } else { otherwise };
                    self.render_nodes(branch, stacks, block, depth, out)?;
                }
                Node::Include(name) => {
                    let included = self.engine.load(name)?;
                    let rendered = self.render_template(&included, depth + 1)?;
                    out.push_str(&rendered);
                }
                Node::Block { name, body } => {
                    let body = stacks
                        .get(name)
                        .and_then(|s| s.first())
                        .unwrap_or(body);
                    self.render_nodes(body, stacks, Some((name.as_str(), 0)), depth, out)?;
                }
                Node::Compress { kind, body } => {
                    let mut content = String::new();
                    self.render_nodes(body, stacks, block, depth, &mut content)?;
                    let replacement = self.handler.handle_block(AssetBlock::new(*kind, content));
                    out.push_str(&replacement);
                }
            }
        }
        Ok(())
    }

    fn evaluate(&self, condition: &Condition) -> bool {
        match condition {
            Condition::Truthy(var) => self.context.is_truthy(var),
            Condition::Falsy(var) => !self.context.is_truthy(var),
            Condition::Equals(var, lit) => self.value(var) == lit,
            Condition::NotEquals(var, lit) => self.value(var) != lit,
        }
    }

    fn value(&self, var: &str) -> &Value {
        self.context.lookup(var).unwrap_or(&Value::Null)
    }
}

fn collect_blocks(nodes: &[Node], stacks: &mut BlockStacks) {
    for node in nodes {
        match node {
            Node::Block { name, body } => {
                stacks.entry(name.clone()).or_default().push(body.clone());
                collect_blocks(body, stacks);
            }
            Node::If { then, otherwise, .. } => {
                collect_blocks(then, stacks);
                collect_blocks(otherwise, stacks);
            }
            Node::Compress { body, .. } => collect_blocks(body, stacks),
            _ => {}
        }
    }
}
