//! Integration tests for the per-row copy buttons.
//!
//! Headless runners may have no system clipboard, so these tests only assert
//! behavior that does not depend on a successful clipboard write; the
//! acknowledgement timing is unit-tested on `TableUiState` with a mocked
//! clock.

mod common;
use common::{sample_transactions, table_harness};

use kittest::Queryable;

#[test]
fn test_copy_button_per_row() {
    let mut harness = table_harness(sample_transactions());
    harness.step();

    let copy_count = harness.query_all_by_label("Copy").count();
    assert_eq!(copy_count, 2, "One copy button per data row");
}

#[test]
fn test_copy_click_never_mutates_the_table() {
    let mut harness = table_harness(sample_transactions());
    harness.step();

    if let Some(button) = harness.query_all_by_label("Copy").next() {
        button.click();
    }
    harness.step();
    harness.step();

    let (model, ui_state) = harness.state();
    assert_eq!(model.rows().len(), 2);
    assert_eq!(ui_state.pending_delete(), None);
    assert_eq!(
        model.sort_state().active(),
        None,
        "Copy must not disturb sort state"
    );
}
