//! Template syntax: lexing and parsing into a node tree

use serde_json::Value;

use crate::domain::ports::TemplateRenderError;
use crate::domain::value_objects::AssetKind;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Text(String),
    Var(String),
    If {
        condition: Condition,
        then: Vec<Node>,
        otherwise: Vec<Node>,
    },
    Include(String),
    Block {
        name: String,
        body: Vec<Node>,
    },
    Compress {
        kind: AssetKind,
        body: Vec<Node>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Condition {
    Truthy(String),
    Falsy(String),
    Equals(String, Value),
    NotEquals(String, Value),
}

/// A parsed template
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Parsed {
    pub extends: Option<String>,
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Text(String),
    Var { expr: String, line: usize },
    Tag { words: Vec<String>, line: usize },
}

struct Lexer<'a> {
    template: &'a str,
    source: &'a str,
}

impl<'a> Lexer<'a> {
    fn syntax(&self, line: usize, message: impl Into<String>) -> TemplateRenderError {
        TemplateRenderError::Syntax {
            template: self.template.to_string(),
            line,
            message: message.into(),
        }
    }

    fn tokens(&self) -> Result<Vec<Token>, TemplateRenderError> {
        let mut tokens = Vec::new();
        let mut rest = self.source;
        let mut line = 1;

        while let Some(start) = find_open(rest) {
            if start > 0 {
                tokens.push(Token::Text(rest[..start].to_string()));
                line += rest[..start].matches('\n').count();
            }
            let open = &rest[start..start + 2];
            let close = match open {
                "{{" => "}}",
                "{%" => "%}",
                _ => "#}",
            };
            let inner_start = start + 2;
            let end = rest[inner_start..]
                .find(close)
                .ok_or_else(|| self.syntax(line, format!("unclosed '{}'", open)))?;
            let inner = &rest[inner_start..inner_start + end];

            match open {
                "{{" => tokens.push(Token::Var {
                    expr: inner.trim().to_string(),
                    line,
                }),
                "{%" => tokens.push(Token::Tag {
                    words: split_words(inner),
                    line,
                }),
                _ => {}
            }

            line += inner.matches('\n').count();
            rest = &rest[inner_start + end + 2..];
        }

        if !rest.is_empty() {
            tokens.push(Token::Text(rest.to_string()));
        }
        Ok(tokens)
    }
}

fn find_open(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    (0..bytes.len().saturating_sub(1))
        .find(|&i| bytes[i] == b'{' && matches!(bytes[i + 1], b'{' | b'%' | b'#'))
}

/// Split tag contents on whitespace, keeping quoted strings whole
fn split_words(inner: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in inner.trim().chars() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == q {
                    quote = None;
                }
            }
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                current.push(c);
            }
            None if c.is_whitespace() => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            None => current.push(c),
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn unquote(word: &str) -> Option<&str> {
    let first = word.chars().next()?;
    if (first == '"' || first == '\'') && word.len() >= 2 && word.ends_with(first) {
        Some(&word[1..word.len() - 1])
    } else {
        None
    }
}

fn literal(word: &str) -> Option<Value> {
    if let Some(s) = unquote(word) {
        return Some(Value::String(s.to_string()));
    }
    match word {
        "true" | "True" => Some(Value::Bool(true)),
        "false" | "False" => Some(Value::Bool(false)),
        "None" | "null" => Some(Value::Null),
        _ => word
            .parse::<i64>()
            .map(Value::from)
            .ok()
            .or_else(|| word.parse::<f64>().ok().map(Value::from)),
    }
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    tokens: std::vec::IntoIter<Token>,
    in_compress: bool,
}

impl Parser<'_> {
    /// Parse nodes until one of `ends` (returned) or end of input (`None`).
    fn parse_until(
        &mut self,
        ends: &[&str],
    ) -> Result<(Vec<Node>, Option<(String, usize)>), TemplateRenderError> {
        let mut nodes = Vec::new();

        while let Some(token) = self.tokens.next() {
            match token {
                Token::Text(text) => nodes.push(Node::Text(text)),
                Token::Var { expr, line } => {
                    if expr.is_empty() {
                        return Err(self.lexer.syntax(line, "empty variable tag"));
                    }
                    nodes.push(Node::Var(expr));
                }
                Token::Tag { words, line } => {
                    let name = words.first().cloned().unwrap_or_default();
                    if ends.contains(&name.as_str()) {
                        return Ok((nodes, Some((name, line))));
                    }
                    if let Some(node) = self.parse_tag(&words, line)? {
                        nodes.push(node);
                    }
                }
            }
        }

        Ok((nodes, None))
    }

    fn expect_end(
        &mut self,
        opener: &str,
        line: usize,
        ends: &[&str],
    ) -> Result<(Vec<Node>, String), TemplateRenderError> {
        match self.parse_until(ends)? {
            (nodes, Some((end, _))) => Ok((nodes, end)),
            (_, None) => Err(self.lexer.syntax(
                line,
                format!("unclosed '{}' tag, expected '{}'", opener, ends.join("' or '")),
            )),
        }
    }

    fn parse_tag(&mut self, words: &[String], line: usize) -> Result<Option<Node>, TemplateRenderError> {
        let name = words.first().map(String::as_str).unwrap_or("");
        match name {
            "load" => Ok(None),
            "if" => {
                let condition = self.parse_condition(&words[1..], line)?;
                let (then, end) = self.expect_end("if", line, &["else", "endif"])?;
                let otherwise = if end == "else" {
                    self.expect_end("else", line, &["endif"])?.0
                } else {
                    Vec::new()
                };
                Ok(Some(Node::If {
                    condition,
                    then,
                    otherwise,
                }))
            }
            "include" => {
                let target = words
                    .get(1)
                    .and_then(|w| unquote(w))
                    .filter(|_| words.len() == 2)
                    .ok_or_else(|| self.lexer.syntax(line, "usage: {% include \"name\" %}"))?;
                Ok(Some(Node::Include(target.to_string())))
            }
            "block" => {
                let block_name = words
                    .get(1)
                    .filter(|_| words.len() == 2)
                    .ok_or_else(|| self.lexer.syntax(line, "usage: {% block name %}"))?
                    .clone();
                let (body, _) = self.expect_end("block", line, &["endblock"])?;
                Ok(Some(Node::Block {
                    name: block_name,
                    body,
                }))
            }
            "compress" => {
                let kind = words
                    .get(1)
                    .and_then(|w| AssetKind::from_tag(w))
                    .ok_or_else(|| self.lexer.syntax(line, "usage: {% compress js|css %}"))?;
                if self.in_compress {
                    return Err(self.lexer.syntax(line, "compress blocks cannot be nested"));
                }
                self.in_compress = true;
                let result = self.expect_end("compress", line, &["endcompress"]);
                self.in_compress = false;
                let (body, _) = result?;
                Ok(Some(Node::Compress { kind, body }))
            }
            "extends" => Err(self.lexer.syntax(line, "'extends' must be the first tag")),
            "" => Err(self.lexer.syntax(line, "empty block tag")),
            other => Err(self.lexer.syntax(line, format!("unknown tag '{}'", other))),
        }
    }

    fn parse_condition(&self, words: &[String], line: usize) -> Result<Condition, TemplateRenderError> {
        let invalid = || self.lexer.syntax(line, "usage: {% if [not] var [== literal] %}");
        match words {
            [var] => Ok(Condition::Truthy(var.clone())),
            [not, var] if not == "not" => Ok(Condition::Falsy(var.clone())),
            [var, op, lit] => {
                let value = literal(lit).ok_or_else(invalid)?;
                match op.as_str() {
                    "==" => Ok(Condition::Equals(var.clone(), value)),
                    "!=" => Ok(Condition::NotEquals(var.clone(), value)),
                    _ => Err(invalid()),
                }
            }
            _ => Err(invalid()),
        }
    }
}

/// Parse `source` (named `template` for diagnostics)
pub(crate) fn parse(template: &str, source: &str) -> Result<Parsed, TemplateRenderError> {
    let lexer = Lexer { template, source };
    let mut tokens = lexer.tokens()?;

    // `extends` must come before any other tag or non-blank text
    let mut extends = None;
    let first_tag = tokens.iter().position(|t| match t {
        Token::Text(text) => !text.trim().is_empty(),
        Token::Tag { words, .. } => words.first().map(String::as_str) != Some("load"),
        Token::Var { .. } => true,
    });
    if let Some(index) = first_tag {
        if let Token::Tag { words, line } = &tokens[index] {
            if words.first().map(String::as_str) == Some("extends") {
                let parent = words
                    .get(1)
                    .and_then(|w| unquote(w))
                    .filter(|_| words.len() == 2)
                    .ok_or_else(|| lexer.syntax(*line, "usage: {% extends \"name\" %}"))?;
                extends = Some(parent.to_string());
                tokens.remove(index);
            }
        }
    }

    let mut parser = Parser {
        lexer,
        tokens: tokens.into_iter(),
        in_compress: false,
    };
    let (nodes, end) = parser.parse_until(&[])?;
    debug_assert!(end.is_none());

    Ok(Parsed { extends, nodes })
}
