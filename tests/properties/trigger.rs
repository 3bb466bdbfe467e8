//! Property tests for trigger values.

use proptest::prelude::*;

use apigw_trigger::domain::value_objects::{HashAlgorithm, TriggerValue};
use apigw_trigger::TriggerCalculator;

fn algorithm() -> impl Strategy<Value = HashAlgorithm> {
    prop_oneof![Just(HashAlgorithm::Sha1), Just(HashAlgorithm::Sha256)]
}

fn identifiers() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(any::<String>(), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the same list always yields the same trigger.
    #[test]
    fn property_trigger_is_deterministic(ids in identifiers(), algo in algorithm()) {
        let calculator = TriggerCalculator::new(algo);
        prop_assert_eq!(calculator.compute_strs(&ids), calculator.compute_strs(&ids.clone()));
    }

    /// PROPERTY: output is lowercase hex of the algorithm's digest length,
    /// and parses back as a recorded trigger.
    #[test]
    fn property_trigger_shape(ids in identifiers(), algo in algorithm()) {
        let trigger = TriggerCalculator::new(algo).compute_strs(&ids);
        let hex = trigger.as_str();

        prop_assert_eq!(hex.len(), algo.hex_len());
        prop_assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        prop_assert_eq!(TriggerValue::parse(hex, algo).unwrap(), trigger);
    }

    /// PROPERTY: moving the boundary between two adjacent identifiers
    /// changes the trigger.
    #[test]
    fn property_split_point_matters(
        text in "[a-z0-9-]{2,24}",
        a in 0usize..24,
        b in 0usize..24,
    ) {
        let a = a % (text.len() + 1);
        let b = b % (text.len() + 1);
        prop_assume!(a != b);

        let calculator = TriggerCalculator::new(HashAlgorithm::Sha1);
        let left = calculator.compute_strs(&[&text[..a], &text[a..]]);
        let right = calculator.compute_strs(&[&text[..b], &text[b..]]);
        prop_assert_ne!(left, right);
    }

    /// PROPERTY: swapping two distinct identifiers changes the trigger.
    #[test]
    fn property_order_matters(
        mut ids in proptest::collection::vec("[a-z]{1,6}", 2..6),
        i in 0usize..6,
        j in 0usize..6,
    ) {
        let i = i % ids.len();
        let j = j % ids.len();
        prop_assume!(ids[i] != ids[j]);

        let calculator = TriggerCalculator::new(HashAlgorithm::Sha1);
        let before = calculator.compute_strs(&ids);
        ids.swap(i, j);
        prop_assert_ne!(before, calculator.compute_strs(&ids));
    }

    /// PROPERTY: appending an identifier, even an empty one, changes the trigger.
    #[test]
    fn property_appending_changes_trigger(ids in identifiers(), extra in any::<String>()) {
        let calculator = TriggerCalculator::new(HashAlgorithm::Sha256);
        let before = calculator.compute_strs(&ids);

        let mut longer = ids;
        longer.push(extra);
        prop_assert_ne!(before, calculator.compute_strs(&longer));
    }
}
