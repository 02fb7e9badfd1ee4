//! Property tests for tri-state selection.

use proptest::prelude::*;

use treeselect::tree::{Node, Section};
use treeselect::{build_tree, OptionRecord, SectionState, SelectionEngine};

#[derive(Debug, Clone)]
enum Op {
    Leaf(usize, bool),
    Section(usize, bool),
    Invert,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (any::<usize>(), any::<bool>()).prop_map(|(i, c)| Op::Leaf(i, c)),
        2 => (any::<usize>(), any::<bool>()).prop_map(|(i, c)| Op::Section(i, c)),
        1 => Just(Op::Invert),
    ]
}

fn records() -> impl Strategy<Value = Vec<OptionRecord>> {
    let segment = prop_oneof![Just("A"), Just("B")].prop_map(String::from);
    proptest::collection::vec(proptest::collection::vec(segment, 1..=3), 1..=16).prop_map(
        |paths| {
            paths
                .into_iter()
                .enumerate()
                .map(|(i, path)| OptionRecord::new(format!("v{i}"), path, i))
                .collect()
        },
    )
}

/// Leaf counts recomputed from scratch, independent of the cached ones
fn count(section: &Section) -> (usize, usize) {
    section
        .children()
        .iter()
        .fold((0, 0), |(checked, total), child| match child {
            Node::Leaf(leaf) => (checked + usize::from(leaf.checked), total + 1),
            Node::Section(sub) => {
                let (c, t) = count(sub);
                (checked + c, total + t)
            }
        })
}

fn expected_state(checked: usize, total: usize) -> SectionState {
    if checked == 0 {
        SectionState::Unchecked
    } else if checked == total {
        SectionState::Checked
    } else {
        SectionState::Indeterminate
    }
}

fn assert_formula(section: &Section) -> Result<(), TestCaseError> {
    for child in section.children() {
        if let Node::Section(sub) = child {
            let (checked, total) = count(sub);
            prop_assert_eq!(sub.checked_count(), checked);
            prop_assert_eq!(sub.leaf_count(), total);
            prop_assert_eq!(sub.state(), expected_state(checked, total));
            assert_formula(sub)?;
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After any toggle sequence every section state follows the formula.
    #[test]
    fn property_section_state_follows_leaves(
        records in records(),
        ops in proptest::collection::vec(op(), 0..=24),
    ) {
        let values: Vec<String> = records.iter().map(|r| r.value.clone()).collect();
        let tree = build_tree(records).unwrap();
        let sections = tree.section_paths();
        let mut engine = SelectionEngine::new(tree, true);

        for op in ops {
            match op {
                Op::Leaf(i, checked) => {
                    engine.set_leaf(&values[i % values.len()], checked).unwrap();
                }
                Op::Section(i, checked) => {
                    engine.set_section(&sections[i % sections.len()], checked).unwrap();
                }
                Op::Invert => {
                    engine.invert().unwrap();
                }
            }
            assert_formula(engine.tree().root())?;
        }
    }

    /// PROPERTY: Checking then unchecking a section restores its ancestors.
    #[test]
    fn property_section_round_trip_restores_ancestors(
        records in records(),
        preselect in proptest::collection::vec(any::<bool>(), 16),
        pick in any::<prop::sample::Index>(),
    ) {
        let values: Vec<String> = records.iter().map(|r| r.value.clone()).collect();
        let tree = build_tree(records).unwrap();
        let sections = tree.section_paths();
        let mut engine = SelectionEngine::new(tree, true);

        let target = sections[pick.index(sections.len())].clone();
        let picked: Vec<&String> = values
            .iter()
            .zip(&preselect)
            .filter(|(_, on)| **on)
            .map(|(v, _)| v)
            .collect();
        engine.preselect(&picked);
        // the target's own leaves start unchecked
        engine.set_section(&target, false).unwrap();

        let ancestors: Vec<Vec<String>> = (1..target.len()).map(|n| target[..n].to_vec()).collect();
        let before: Vec<Option<SectionState>> =
            ancestors.iter().map(|a| engine.section_state(a)).collect();

        engine.set_section(&target, true).unwrap();
        prop_assert_eq!(engine.section_state(&target), Some(SectionState::Checked));
        engine.set_section(&target, false).unwrap();

        prop_assert_eq!(engine.section_state(&target), Some(SectionState::Unchecked));
        let after: Vec<Option<SectionState>> =
            ancestors.iter().map(|a| engine.section_state(a)).collect();
        prop_assert_eq!(before, after);
    }
}
