//! Property tests for the template engine.

use std::sync::Arc;

use proptest::prelude::*;

use precompress::domain::ports::TemplateEngine;
use precompress::infrastructure::{MemoryLoader, MiniTemplateEngine};
use precompress::{AssetBlock, RenderContext, Template};

fn engine() -> MiniTemplateEngine {
    MiniTemplateEngine::new(Arc::new(MemoryLoader::new()))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing and rendering arbitrary input never panics.
    #[test]
    fn property_engine_never_panics(source in "[{}%#a-z \"'\n]{0,120}") {
        let engine = engine();
        let template = Template::new("fuzz.html", source);
        let _ = engine.validate(&template);
        let mut handler = |block: AssetBlock| block.content().to_string();
        let _ = engine.render(&template, &RenderContext::new(), &mut handler);
    }

    /// PROPERTY: Text without template syntax renders verbatim.
    #[test]
    fn property_plain_text_renders_verbatim(source in "[a-zA-Z0-9 <>/=\"\n;.]{0,200}") {
        let engine = engine();
        let template = Template::new("plain.html", source.clone());
        let mut handler = |_: AssetBlock| String::new();

        let rendered = engine.render(&template, &RenderContext::new(), &mut handler).unwrap();
        prop_assert_eq!(rendered, source);
    }

    /// PROPERTY: Every compress block reaches the handler, in document order.
    #[test]
    fn property_blocks_reach_handler_in_order(
        bodies in proptest::collection::vec("[a-z ;]{0,30}", 0..6),
    ) {
        let source: String = bodies
            .iter()
            .map(|b| format!("<p>{{% compress js %}}{}{{% endcompress %}}</p>", b))
            .collect();
        let engine = engine();
        let template = Template::new("blocks.html", source);

        let mut seen = Vec::new();
        let mut handler = |block: AssetBlock| {
            seen.push(block.content().to_string());
            "[x]".to_string()
        };
        let rendered = engine.render(&template, &RenderContext::new(), &mut handler).unwrap();

        prop_assert_eq!(&seen, &bodies);
        prop_assert_eq!(rendered, "<p>[x]</p>".repeat(bodies.len()));
    }
}
