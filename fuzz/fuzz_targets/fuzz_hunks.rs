#![no_main]

use libfuzzer_sys::fuzz_target;
use precompress::domain::services::{join_hunks, parse_hunks, Hunk};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let hunks = parse_hunks(content);
        for kind in precompress::AssetKind::ALL {
            let texts: Vec<&str> = hunks
                .iter()
                .filter_map(|h| match h {
                    Hunk::Inline { body, .. } => Some(body.as_str()),
                    Hunk::External { .. } => None,
                })
                .collect();
            let _ = join_hunks(kind, &texts);
        }
    }
});
