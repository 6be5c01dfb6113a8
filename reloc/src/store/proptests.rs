//! Property-based tests for the alias store.

use super::*;
use proptest::prelude::*;
use std::collections::BTreeMap;
use tempfile::TempDir;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,12}"
}

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9 _.-]{1,10}", 1..5).prop_map(|parts| {
        let parts: Vec<String> = parts
            .into_iter()
            .map(|p| if p == "." || p == ".." { "x".to_string() } else { p })
            .collect();
        format!("/{}", parts.join("/"))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        .. ProptestConfig::default()
    })]

    // Valid names always pass validation and survive a record round trip.
    #[test]
    fn valid_names_accepted(name in name_strategy()) {
        prop_assert!(AliasName::try_from(name.as_str()).is_ok());
    }

    // Any non-alphanumeric character is rejected.
    #[test]
    fn names_with_symbols_rejected(prefix in "[a-z]{0,4}", bad in "[-_./ :@]", suffix in "[a-z]{0,4}") {
        let name = format!("{prefix}{bad}{suffix}");
        prop_assert!(AliasName::try_from(name.as_str()).is_err());
    }

    // Forced upserts leave exactly the last binding per name, and a fresh
    // store instance over the same file sees the same set.
    #[test]
    fn store_round_trip(entries in prop::collection::vec((name_strategy(), path_strategy()), 1..12)) {
        let dir = TempDir::new().unwrap();
        let store = AliasStore::new(dir.path().join("relocations"));

        let mut expected = BTreeMap::new();
        for (name, path) in &entries {
            store.upsert(name, path, true).unwrap();
            expected.insert(name.clone(), PathBuf::from(path));
        }

        let reopened = AliasStore::new(store.path());
        let listed: BTreeMap<String, PathBuf> = reopened
            .list_all()
            .unwrap()
            .map(|a| (a.name().to_string(), a.path().to_path_buf()))
            .collect();
        prop_assert_eq!(listed, expected);
        prop_assert_eq!(reopened.load().unwrap().len(), reopened.list_all().unwrap().count());
    }
}
