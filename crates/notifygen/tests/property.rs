//! Property tests for name derivation and hint determinism.

use notifygen::{
    naming::{derive_property_name, property_name},
    semantic::ContainerKey,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prefixed_identifiers_follow_the_naming_law(rest in "[a-zA-Z][a-zA-Z0-9]{0,12}") {
        let derived = derive_property_name(&format!("_{rest}"));

        let mut expected = String::new();
        expected.push(rest.chars().next().unwrap().to_ascii_uppercase());
        expected.push_str(&rest[1..]);

        prop_assert_eq!(derived, expected);
    }

    #[test]
    fn unprefixed_identifiers_only_get_their_first_char_uppercased(
        ident in "[a-zA-Z][a-zA-Z0-9_]{0,12}",
    ) {
        let derived = derive_property_name(&ident);

        prop_assert_eq!(&derived[1..], &ident[1..]);
        prop_assert_eq!(
            derived.chars().next().unwrap(),
            ident.chars().next().unwrap().to_ascii_uppercase()
        );
    }

    #[test]
    fn overrides_always_win(
        ident in "[a-z_][a-zA-Z0-9_]{0,12}",
        explicit in "[A-Z][a-zA-Z0-9]{0,12}",
    ) {
        prop_assert_eq!(property_name(&ident, Some(&explicit)), explicit);
    }

    #[test]
    fn hint_keys_are_a_pure_function_of_the_container(
        namespace in prop::collection::vec("[a-z][a-z0-9]{0,6}", 0..4),
        name in "[A-Z][a-zA-Z0-9]{0,12}",
    ) {
        let key = ContainerKey { namespace, name };

        prop_assert_eq!(key.hint(), key.hint());
        prop_assert!(key.hint().ends_with(".g.rs"));
        prop_assert!(key.hint().contains(&key.name));
    }
}

#[test]
fn bare_prefix_still_derives_to_empty() {
    assert_eq!(derive_property_name("_"), "");
}
