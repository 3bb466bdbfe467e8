//! Property tests for the canonical encoding.

use proptest::prelude::*;

use apigw_trigger::domain::services::canonical;
use apigw_trigger::domain::value_objects::{Identifier, IdentifierSet};

fn encode(values: &[String]) -> String {
    let set: IdentifierSet = values.iter().map(String::as_str).collect();
    canonical::encode(&set)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the encoding is printable ASCII only.
    #[test]
    fn property_encoding_is_printable_ascii(values in proptest::collection::vec(any::<String>(), 0..6)) {
        let encoded = encode(&values);
        prop_assert!(encoded.bytes().all(|b| (b' '..=b'~').contains(&b)));
    }

    /// PROPERTY: the encoding is a JSON array that decodes to the input.
    #[test]
    fn property_encoding_decodes_to_input(values in proptest::collection::vec(any::<String>(), 0..6)) {
        let decoded: Vec<String> = serde_json::from_str(&encode(&values)).unwrap();
        prop_assert_eq!(decoded, values);
    }

    /// PROPERTY: distinct lists never share an encoding.
    #[test]
    fn property_encoding_is_injective(
        a in proptest::collection::vec("[a-c\"\\\\, ]{0,3}", 0..4),
        b in proptest::collection::vec("[a-c\"\\\\, ]{0,3}", 0..4),
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(encode(&a), encode(&b));
    }

    /// PROPERTY: a single identifier encodes as a one-element array.
    #[test]
    fn property_single_identifier_is_bracketed(value in any::<String>()) {
        let encoded = canonical::encode(&[Identifier::new(value)]);
        prop_assert!(encoded.starts_with("[\""));
        prop_assert!(encoded.ends_with("\"]"));
    }
}
