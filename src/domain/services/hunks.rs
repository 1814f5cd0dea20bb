//! Hunk extraction
//!
//! Splits the body of a compress block into the pieces that make up the
//! bundle: inline `<script>`/`<style>` bodies and external references
//! (`<script src>`, `<link rel="stylesheet" href>`). Anything else in the
//! block is ignored.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::value_objects::AssetKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hunk {
    Inline { kind: AssetKind, body: String },
    External { kind: AssetKind, url: String },
}

impl Hunk {
    pub fn kind(&self) -> AssetKind {
        match self {
            Hunk::Inline { kind, .. } | Hunk::External { kind, .. } => *kind,
        }
    }
}

#[allow(clippy::expect_used)]
fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?is)<script\b(?P<sattrs>[^>]*)>(?P<sbody>.*?)</script\s*>|<style\b(?P<stattrs>[^>]*)>(?P<stbody>.*?)</style\s*>|<link\b(?P<lattrs>[^>]*)>",
        )
        .expect("hunk regex is valid")
    })
}

#[allow(clippy::expect_used)]
fn attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)([a-z_:][-a-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>/]+))"#)
            .expect("attribute regex is valid")
    })
}

fn parse_attrs(raw: &str) -> HashMap<String, String> {
    attr_regex()
        .captures_iter(raw)
        .map(|cap| {
            let value = cap
                .get(2)
                .or_else(|| cap.get(3))
                .or_else(|| cap.get(4))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            (cap[1].to_ascii_lowercase(), value)
        })
        .collect()
}

/// Parse hunks from a rendered block body, in document order.
pub fn parse_hunks(content: &str) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    for cap in tag_regex().captures_iter(content) {
        if let Some(attrs) = cap.name("sattrs") {
            let attrs = parse_attrs(attrs.as_str());
            match attrs.get("src") {
                Some(src) => hunks.push(Hunk::External {
                    kind: AssetKind::Script,
                    url: src.clone(),
                }),
                None => hunks.push(Hunk::Inline {
                    kind: AssetKind::Script,
                    body: cap
                        .name("sbody")
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default(),
                }),
            }
        } else if cap.name("stattrs").is_some() {
            hunks.push(Hunk::Inline {
                kind: AssetKind::Style,
                body: cap
                    .name("stbody")
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
            });
        } else if let Some(attrs) = cap.name("lattrs") {
            let attrs = parse_attrs(attrs.as_str());
            let is_stylesheet = attrs
                .get("rel")
                .is_some_and(|rel| rel.eq_ignore_ascii_case("stylesheet"));
            if let (true, Some(href)) = (is_stylesheet, attrs.get("href")) {
                hunks.push(Hunk::External {
                    kind: AssetKind::Style,
                    url: href.clone(),
                });
            }
        }
    }
    hunks
}

/// Concatenate resolved hunk texts the way a bundle of `kind` is assembled.
pub fn join_hunks<S: AsRef<str>>(kind: AssetKind, texts: &[S]) -> String {
    texts
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(kind.separator())
}
