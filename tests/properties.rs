use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use serde_json::Value;
use treeify::tree::builder::{build_tree, BuildOptions};
use treeify::tree::ops;

/// Bounded arbitrary JSON values: scalars at the leaves, objects and arrays
/// up to a few levels deep.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| serde_json::json!(n)),
        "[a-zA-Z0-9 :_.]{0,20}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-zA-Z0-9 :_.]{0,12}", inner), 0..6).prop_map(|pairs| {
                let mut map = serde_json::Map::new();
                for (key, value) in pairs {
                    map.insert(key, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

proptest! {
    #[test]
    fn stats_totals_match_recursive_counts(value in arb_json()) {
        let tree = build_tree(&value, &BuildOptions::default()).unwrap();
        let stats = ops::stats(&tree);
        prop_assert_eq!(stats.files, ops::count_files(&tree));
        prop_assert_eq!(stats.directories, ops::count_directories(&tree));
        prop_assert_eq!(stats.total_nodes, stats.files + stats.directories);
    }

    #[test]
    fn file_paths_have_no_duplicates(value in arb_json()) {
        let tree = build_tree(&value, &BuildOptions::default()).unwrap();
        let paths = ops::file_paths(&tree);
        let unique: HashSet<&String> = paths.iter().collect();
        prop_assert_eq!(unique.len(), paths.len());
    }

    #[test]
    fn sort_tree_is_idempotent(value in arb_json()) {
        let tree = build_tree(&value, &BuildOptions::default()).unwrap();
        let once = ops::sort_tree(&tree);
        let twice = ops::sort_tree(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_tree_preserves_stats(value in arb_json()) {
        let tree = build_tree(&value, &BuildOptions::default()).unwrap();
        let sorted = ops::sort_tree(&tree);
        prop_assert_eq!(ops::stats(&tree), ops::stats(&sorted));
    }

    #[test]
    fn file_paths_round_trip_through_tree_from_paths(value in arb_json()) {
        let tree = build_tree(&value, &BuildOptions::default()).unwrap();
        let paths = ops::file_paths(&tree);
        let rebuilt = ops::tree_from_paths(&paths, "stub");
        let original: BTreeSet<String> = paths.into_iter().collect();
        let recovered: BTreeSet<String> = ops::file_paths(&rebuilt).into_iter().collect();
        prop_assert_eq!(original, recovered);
    }

    #[test]
    fn flatten_orders_parents_before_children(value in arb_json()) {
        let tree = build_tree(&value, &BuildOptions::default()).unwrap();
        let entries = ops::flatten(&tree);
        for entry in &entries {
            if let Some((parent, _)) = entry.path.rsplit_once('/') {
                let parent_index = entries.iter().position(|e| e.path == parent);
                let own_index = entries.iter().position(|e| e.path == entry.path);
                prop_assert!(parent_index.is_some());
                prop_assert!(parent_index < own_index);
            }
        }
    }

    #[test]
    fn find_by_path_resolves_every_flattened_path(value in arb_json()) {
        let tree = build_tree(&value, &BuildOptions::default()).unwrap();
        for entry in ops::flatten(&tree) {
            let node = ops::find_by_path(&tree, &entry.path);
            prop_assert!(node.is_some());
            prop_assert_eq!(node.unwrap().path(), entry.path.as_str());
        }
    }
}
