//! CONTRACT: Construction either yields a consistent widget or nothing.

use treeselect::{
    build_tree, OptionRecord, Options, SectionState, TreeBuilder, TreeMultiselect, TreeSelectError,
};

use crate::common::xyz_records;

#[test]
fn contract_invalid_paths_abort_the_build() {
    let cases = [vec![], vec![""], vec!["X", ""], vec!["", "Y"]];
    for path in cases {
        let records = vec![
            OptionRecord::new("ok", ["X"], 0),
            OptionRecord::new("bad", path.clone(), 1),
        ];
        let result = build_tree(records);
        assert!(
            matches!(result, Err(TreeSelectError::InvalidPath { ref value, .. }) if value == "bad"),
            "path {path:?} should be rejected"
        );
    }
}

#[test]
fn contract_empty_input_builds_empty_tree() {
    let tree = build_tree(Vec::new()).unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.root().state(), SectionState::Unchecked);

    let widget = TreeMultiselect::builder(Vec::new()).build().unwrap();
    assert!(widget.selected_values().is_empty());
    assert!(widget.backing_list().items().is_empty());
}

#[test]
fn contract_preselection_is_reflected_in_section_states() {
    let widget = TreeMultiselect::builder(xyz_records())
        .preselected(["a", "b"])
        .build()
        .unwrap();

    assert_eq!(widget.engine().section_state(&["X", "Y"]), Some(SectionState::Checked));
    assert_eq!(widget.engine().section_state(&["X"]), Some(SectionState::Indeterminate));
    assert_eq!(widget.backing_list().selected(), vec!["a", "b"]);
}

#[test]
fn contract_preselection_applies_even_when_frozen() {
    let widget = TreeMultiselect::builder(xyz_records())
        .options(Options {
            freeze: true,
            ..Options::default()
        })
        .preselected(["c"])
        .build()
        .unwrap();

    assert_eq!(widget.selected_values(), vec!["c"]);
}

#[test]
fn contract_delimiter_only_affects_joined_paths() {
    let tree = TreeBuilder::new()
        .with_delimiter("::")
        .build(xyz_records())
        .unwrap();

    assert_eq!(tree.delimiter(), "::");
    assert_eq!(tree.join_path(&["X", "Y"]), "X::Y");
    assert!(tree.section(&["X", "Y"]).is_some());
}
