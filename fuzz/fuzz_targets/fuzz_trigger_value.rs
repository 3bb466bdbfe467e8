#![no_main]

use apigw_trigger::TriggerValue;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(value) = TriggerValue::parse_any(content) {
            assert_eq!(value.as_str(), content);
            assert_eq!(value.as_str().len(), value.algorithm().hex_len());
        }
    }
});
