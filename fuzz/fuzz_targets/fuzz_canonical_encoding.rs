#![no_main]

use apigw_trigger::domain::services::canonical;
use apigw_trigger::IdentifierSet;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Split on NUL so one input covers multi-identifier lists
        let ids: IdentifierSet = content.split('\0').collect();
        let encoded = canonical::encode(&ids);

        assert!(encoded.is_ascii());
        let decoded: Vec<String> = serde_json::from_str(&encoded).expect("encoding is valid JSON");
        assert_eq!(decoded.len(), ids.len());
        for (d, id) in decoded.iter().zip(&ids) {
            assert_eq!(d, id.as_str());
        }
    }
});
