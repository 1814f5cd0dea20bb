#![no_main]

use std::sync::Arc;

use libfuzzer_sys::fuzz_target;
use precompress::domain::ports::TemplateEngine;
use precompress::infrastructure::{MemoryLoader, MiniTemplateEngine};
use precompress::{AssetBlock, RenderContext, Template};

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let loader = MemoryLoader::new().with("fuzz.html", source);
        let engine = MiniTemplateEngine::new(Arc::new(loader));
        let template = Template::new("fuzz.html", source);

        // Parsing and rendering (including self-includes) should never panic
        let _ = engine.validate(&template);
        let mut handler = |block: AssetBlock| block.content().to_string();
        let _ = engine.render(&template, &RenderContext::new(), &mut handler);
    }
});
