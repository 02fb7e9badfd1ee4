//! Property tests for tree construction.

use std::collections::HashSet;

use proptest::prelude::*;

use treeselect::tree::{Node, Section};
use treeselect::{build_tree, OptionRecord, TreeSelectError};

/// Section paths drawn from a tiny alphabet so merges happen often
fn section_path() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        prop_oneof![Just("A"), Just("B"), Just("C")].prop_map(String::from),
        1..=3,
    )
}

fn records() -> impl Strategy<Value = Vec<OptionRecord>> {
    proptest::collection::vec(section_path(), 0..=24).prop_map(|paths| {
        paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| OptionRecord::new(format!("v{i}"), path, i))
            .collect()
    })
}

fn collect_values(section: &Section, out: &mut Vec<String>) {
    for child in section.children() {
        match child {
            Node::Section(sub) => collect_values(sub, out),
            Node::Leaf(leaf) => out.push(leaf.value.clone()),
        }
    }
}

/// Child names are unique per level
fn sections_are_merged(section: &Section) -> bool {
    let mut seen = HashSet::new();
    section.children().iter().all(|child| match child {
        Node::Section(sub) => seen.insert(sub.name().to_string()) && sections_are_merged(sub),
        Node::Leaf(_) => true,
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every record is reachable at exactly its section path.
    #[test]
    fn property_every_record_is_reachable(records in records()) {
        let tree = build_tree(records.clone()).unwrap();

        prop_assert_eq!(tree.leaf_count(), records.len());
        for record in &records {
            let section = tree.section(&record.section_path);
            prop_assert!(section.is_some());
            let holds_leaf = section.unwrap().children().iter().any(|child| {
                child.as_leaf().map(|l| l.value == record.value).unwrap_or(false)
            });
            prop_assert!(holds_leaf, "{} missing under {:?}", record.value, record.section_path);
        }
    }

    /// PROPERTY: Same-named sections at one level are merged.
    #[test]
    fn property_sections_are_merged(records in records()) {
        let tree = build_tree(records).unwrap();
        prop_assert!(sections_are_merged(tree.root()));
    }

    /// PROPERTY: Depth-first leaf order preserves input order within a section.
    #[test]
    fn property_leaves_keep_input_order_per_section(records in records()) {
        let tree = build_tree(records.clone()).unwrap();

        let mut values = Vec::new();
        collect_values(tree.root(), &mut values);
        prop_assert_eq!(values.len(), records.len());

        for a in &records {
            for b in &records {
                if a.section_path == b.section_path && a.original_index < b.original_index {
                    let pos_a = values.iter().position(|v| *v == a.value);
                    let pos_b = values.iter().position(|v| *v == b.value);
                    prop_assert!(pos_a < pos_b);
                }
            }
        }
    }

    /// PROPERTY: A repeated value always fails the build.
    #[test]
    fn property_duplicate_values_are_rejected(
        records in records().prop_filter("non-empty", |r| !r.is_empty()),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut records = records;
        let dup = records[pick.index(records.len())].clone();
        records.push(OptionRecord::new(dup.value.clone(), ["Elsewhere"], 99));

        let is_duplicate = matches!(
            build_tree(records),
            Err(TreeSelectError::DuplicateValue { .. })
        );
        prop_assert!(is_duplicate);
    }
}
