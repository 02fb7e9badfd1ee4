//! CONTRACT: A rejected toggle leaves no trace.
//!
//! Selection, backing list and notification count are identical before and
//! after any call that returns an error.

use std::cell::Cell;
use std::rc::Rc;

use treeselect::{
    Options, SelectionDelta, TreeMultiselect, TreeSelectError, TreeSelectResult,
};

use crate::common::xyz_records;

type Mutation = fn(&mut TreeMultiselect) -> TreeSelectResult<SelectionDelta>;

fn build(options: Options) -> (TreeMultiselect, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let widget = TreeMultiselect::builder(xyz_records())
        .options(options)
        .preselected(["b"])
        .change_sink(Box::new(move |_: &SelectionDelta| counter.set(counter.get() + 1)))
        .build()
        .unwrap();
    (widget, calls)
}

fn assert_no_trace(options: Options, mutation: Mutation, expect: fn(&TreeSelectError) -> bool) {
    let (mut widget, calls) = build(options);
    let selected = widget.selected_values();
    let items = widget.backing_list().items();
    let backing_selected = widget.backing_list().selected();
    let notified = calls.get();

    let err = mutation(&mut widget).unwrap_err();

    assert!(expect(&err), "unexpected error: {err}");
    assert_eq!(widget.selected_values(), selected);
    assert_eq!(widget.backing_list().items(), items);
    assert_eq!(widget.backing_list().selected(), backing_selected);
    assert_eq!(calls.get(), notified);
}

fn frozen() -> Options {
    Options {
        freeze: true,
        ..Options::default()
    }
}

fn no_batch() -> Options {
    Options {
        allow_batch_selection: false,
        ..Options::default()
    }
}

fn is_not_found(err: &TreeSelectError) -> bool {
    matches!(err, TreeSelectError::NotFound { .. })
}

fn is_frozen(err: &TreeSelectError) -> bool {
    matches!(err, TreeSelectError::Frozen)
}

fn is_batch_disabled(err: &TreeSelectError) -> bool {
    matches!(err, TreeSelectError::BatchSelectionDisabled)
}

#[test]
fn contract_not_found_leaves_no_trace() {
    let mutations: [Mutation; 4] = [
        |w| w.set_leaf("missing", true),
        |w| w.toggle_leaf("missing"),
        |w| w.set_section(&["X", "Missing"], true),
        |w| w.set_section_str("Nope", false),
    ];
    for mutation in mutations {
        assert_no_trace(Options::default(), mutation, is_not_found);
    }
}

#[test]
fn contract_frozen_leaves_no_trace() {
    let mutations: [Mutation; 6] = [
        |w| w.set_leaf("a", true),
        |w| w.remove_selected("b"),
        |w| w.set_section(&["X"], true),
        |w| w.select_all(),
        |w| w.select_none(),
        |w| w.invert(),
    ];
    for mutation in mutations {
        assert_no_trace(frozen(), mutation, is_frozen);
    }
}

#[test]
fn contract_batch_disabled_leaves_no_trace() {
    let mutations: [Mutation; 5] = [
        |w| w.set_section(&["X"], true),
        |w| w.toggle_section(&["X", "Y"]),
        |w| w.select_all(),
        |w| w.select_none(),
        |w| w.invert(),
    ];
    for mutation in mutations {
        assert_no_trace(no_batch(), mutation, is_batch_disabled);
    }
}
