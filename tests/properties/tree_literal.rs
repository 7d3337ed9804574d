//! Property tests for the `--tree` JSON literal.

use proptest::prelude::*;

use menutree::{Branch, MenuError, MenuTree};

fn slot() -> impl Strategy<Value = Option<Vec<String>>> {
    prop_oneof![
        Just(None),
        proptest::collection::vec("[A-Za-z ]{0,8}", 0..=3).prop_map(Some),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_from_json_never_panics(content in "(?s).{0,256}") {
        let _ = MenuTree::from_json(&content);
    }

    /// PROPERTY: Well-shaped literals are accepted exactly when the first layer opens
    /// with a non-empty screen (`[]` is an exit slot, never an empty screen).
    #[test]
    fn property_shaped_literal_validation(
        layers in proptest::collection::vec(proptest::collection::vec(slot(), 0..=3), 1..=3),
    ) {
        let json = serde_json::to_string(&layers).unwrap();

        let opens_with_screen = matches!(
            layers.first().and_then(|l| l.first()),
            Some(Some(labels)) if !labels.is_empty()
        );

        match MenuTree::from_json(&json) {
            Ok(tree) => {
                prop_assert!(opens_with_screen);
                prop_assert_eq!(tree.depth(), layers.len());
                prop_assert!(matches!(tree.branch(0, 0), Some(Branch::Submenu(_))));
            }
            Err(MenuError::InvalidTree { .. }) => prop_assert!(!opens_with_screen),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
