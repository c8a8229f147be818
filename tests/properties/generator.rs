//! Property tests for symbol generation.

use std::collections::BTreeSet;

use proptest::prelude::*;

use acsym::{generate_symbols, AcsymError};

fn distinct_names() -> impl Strategy<Value = Vec<String>> {
    // Single-segment lowercase names cannot collide after sanitization.
    proptest::collection::btree_set("[a-z][a-z0-9]{0,10}", 0..16)
        .prop_map(|set: BTreeSet<String>| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Generation is a pure function of its input.
    #[test]
    fn property_generation_is_idempotent(names in distinct_names()) {
        let first = generate_symbols(&names, "ACImageName").unwrap();
        let second = generate_symbols(&names, "ACImageName").unwrap();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Input order never changes the output.
    #[test]
    fn property_order_independent(names in distinct_names()) {
        let mut reversed = names.clone();
        reversed.reverse();
        prop_assert_eq!(
            generate_symbols(&names, "ACImageName").unwrap(),
            generate_symbols(&reversed, "ACImageName").unwrap()
        );
    }

    /// PROPERTY: One constant per name, literal values unchanged, sorted by name.
    #[test]
    fn property_one_constant_per_name(names in distinct_names()) {
        let pairs = generate_symbols(&names, "ACImageName").unwrap();
        let values: Vec<String> = pairs.iter().map(|(_, v)| v.clone()).collect();

        let mut expected = names.clone();
        expected.sort();
        prop_assert_eq!(values, expected);
    }

    /// PROPERTY: Any subset produces exactly the subset's constants.
    #[test]
    fn property_subset_yields_subset(names in distinct_names(), keep in any::<u16>()) {
        let subset: Vec<String> = names
            .iter()
            .enumerate()
            .filter(|(i, _)| keep & (1 << (i % 16)) != 0)
            .map(|(_, n)| n.clone())
            .collect();

        let all = generate_symbols(&names, "ACImageName").unwrap();
        let some = generate_symbols(&subset, "ACImageName").unwrap();

        prop_assert_eq!(some.len(), subset.len());
        for pair in &some {
            prop_assert!(all.contains(pair));
        }
    }

    /// PROPERTY: Names differing only by separator or case collide.
    #[test]
    fn property_collisions_are_rejected(
        head in "[a-z]{1,6}",
        tail in "[a-z]{1,6}",
        upper in any::<bool>(),
    ) {
        let first = format!("{}-{}", head, tail);
        let second = if upper {
            first.to_uppercase()
        } else {
            format!("{}_{}", head, tail)
        };

        let err = generate_symbols(&[first, second], "ACImageName").unwrap_err();
        let is_duplicate = matches!(err, AcsymError::DuplicateAssetName { .. });
        prop_assert!(is_duplicate);
    }
}
