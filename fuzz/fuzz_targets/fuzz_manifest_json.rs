#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(manifest) = precompress::application::manifest_from_json("fuzz", text) {
            // Anything accepted must serialize again
            let _ = precompress::application::manifest_to_json(&manifest).unwrap();
        }
    }
});
