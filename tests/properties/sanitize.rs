//! Property tests for name sanitization.

use proptest::prelude::*;

use acsym::sanitize::{is_identifier, pascal_case, symbol_name};

fn catalog_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-zA-Z0-9]{0,8}([-_ /.][a-zA-Z0-9]{1,8}){0,4}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Sanitization never panics, whatever the input.
    #[test]
    fn property_pascal_case_never_panics(name in any::<String>()) {
        let _ = pascal_case(&name);
    }

    /// PROPERTY: A successful sanitization only contains ASCII alphanumerics.
    #[test]
    fn property_pascal_case_is_ascii_alphanumeric(name in any::<String>()) {
        if let Ok(fragment) = pascal_case(&name) {
            prop_assert!(!fragment.is_empty());
            prop_assert!(fragment.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    /// PROPERTY: Every symbol under a valid prefix is a valid identifier.
    #[test]
    fn property_symbol_is_identifier(name in catalog_name()) {
        let symbol = symbol_name("ACImageName", &name).unwrap();
        prop_assert!(is_identifier(&symbol), "not an identifier: {}", symbol);
        prop_assert!(symbol.starts_with("ACImageName"));
    }

    /// PROPERTY: Separators never matter, only the segments between them.
    #[test]
    fn property_separator_choice_is_irrelevant(
        segments in proptest::collection::vec("[a-z][a-z0-9]{0,6}", 1..5),
        sep_a in "[-_ /.]",
        sep_b in "[-_ /.]",
    ) {
        let a = segments.join(sep_a.as_str());
        let b = segments.join(sep_b.as_str());
        prop_assert_eq!(pascal_case(&a).unwrap(), pascal_case(&b).unwrap());
    }
}
