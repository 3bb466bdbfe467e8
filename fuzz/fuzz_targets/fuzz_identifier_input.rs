#![no_main]

use std::path::Path;

use apigw_trigger::infrastructure::parse_identifiers;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = parse_identifiers(content, Path::new("<fuzz>"));
    }
});
