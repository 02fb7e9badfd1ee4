//! Property tests for the output synchronizer.

use proptest::prelude::*;

use treeselect::selection::order_items;
use treeselect::{build_tree, OptionRecord, OutputSynchronizer, SelectionEngine};

fn shuffled_records() -> impl Strategy<Value = Vec<OptionRecord>> {
    (1usize..=16)
        .prop_flat_map(|n| {
            (
                Just(n),
                Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
                proptest::collection::vec(prop_oneof![Just("P"), Just("Q"), Just("R")], n),
            )
        })
        .prop_map(|(n, indices, sections)| {
            (0..n)
                .map(|i| OptionRecord::new(format!("v{i}"), [sections[i]], indices[i]))
                .collect()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Output is sorted by original index regardless of tree position.
    #[test]
    fn property_ordered_by_original_index(
        records in shuffled_records(),
        mask in proptest::collection::vec(any::<bool>(), 16),
    ) {
        let picked: Vec<String> = records
            .iter()
            .zip(&mask)
            .filter(|(_, on)| **on)
            .map(|(r, _)| r.value.clone())
            .collect();
        let mut engine = SelectionEngine::new(build_tree(records).unwrap(), true);
        engine.preselect(&picked);

        let delta = OutputSynchronizer::new().recompute(&engine);

        prop_assert_eq!(delta.ordered.len(), picked.len());
        prop_assert!(delta
            .ordered
            .windows(2)
            .all(|w| w[0].original_index <= w[1].original_index));
    }

    /// PROPERTY: A second recompute without changes is a no-op.
    #[test]
    fn property_recompute_is_idempotent(
        records in shuffled_records(),
        mask in proptest::collection::vec(any::<bool>(), 16),
    ) {
        let picked: Vec<String> = records
            .iter()
            .zip(&mask)
            .filter(|(_, on)| **on)
            .map(|(r, _)| r.value.clone())
            .collect();
        let mut engine = SelectionEngine::new(build_tree(records).unwrap(), true);
        engine.preselect(&picked);

        let mut sync = OutputSynchronizer::new();
        let first = sync.recompute(&engine);
        let second = sync.recompute(&engine);

        prop_assert!(second.is_unchanged());
        prop_assert_eq!(first.ordered, second.ordered);
    }

    /// PROPERTY: Backing order is selected-first, then unselected in prior order.
    #[test]
    fn property_order_items_keeps_unselected_trailing(
        items in Just((0..12).map(|i| format!("i{i}")).collect::<Vec<_>>()).prop_shuffle(),
        mask in proptest::collection::vec(any::<bool>(), 12),
    ) {
        let ordered: Vec<String> = items
            .iter()
            .zip(&mask)
            .filter(|(_, on)| **on)
            .map(|(v, _)| v.clone())
            .rev()
            .collect();
        let unselected: Vec<String> = items
            .iter()
            .filter(|v| !ordered.contains(v))
            .cloned()
            .collect();

        let result = order_items(items, &ordered);

        prop_assert_eq!(&result[..ordered.len()], ordered.as_slice());
        prop_assert_eq!(&result[ordered.len()..], unselected.as_slice());
    }
}
