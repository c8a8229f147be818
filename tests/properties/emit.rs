//! Property tests for the emitters.

use proptest::prelude::*;

use acsym::{get_emitter, AssetEntry, Language, SymbolGenerator};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rendered files hold exactly one declaration per asset and
    /// keep the scaffolding intact.
    #[test]
    fn property_one_declaration_per_asset(
        names in proptest::collection::btree_set("[a-z][a-z0-9]{0,10}", 0..12),
        module_private in any::<bool>(),
    ) {
        let entries: Vec<AssetEntry> = names.iter().map(|n| AssetEntry::image(n.as_str())).collect();
        let file = SymbolGenerator::new()
            .with_module_private(module_private)
            .generate(&entries)
            .unwrap();

        let header = get_emitter(Language::Objc).render(&file);
        prop_assert!(header.starts_with("#import <Foundation/Foundation.h>\n"));
        prop_assert_eq!(header.matches("static NSString * const").count(), names.len());
        prop_assert_eq!(header.contains("#undef AC_SWIFT_PRIVATE"), module_private);

        let swift = get_emitter(Language::Swift).render(&file);
        prop_assert_eq!(swift.matches(" let ").count(), names.len());

        prop_assert_eq!(get_emitter(Language::Objc).render(&file), header);
    }
}
