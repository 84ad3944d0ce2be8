use egui_kittest::Harness;
use gridkit_states::{Cell, Column, Row, TableModel};
use gridkit_ui::widgets::{TableUiState, sortable_table};

pub type TableHarness<'a> = Harness<'a, (TableModel, TableUiState)>;

/// Harness rendering a single sortable table.
pub fn table_harness(model: TableModel) -> TableHarness<'static> {
    Harness::new_ui_state(
        |ui, (model, ui_state)| {
            sortable_table(ui, model, ui_state);
        },
        (model, TableUiState::new()),
    )
}

/// Two rows where "10" sorts below "2" lexically but above it numerically,
/// so number-typed sorting is observable.
pub fn sample_transactions() -> TableModel {
    let mut table = TableModel::new(vec![Column::text("Description"), Column::number("Amount")]);
    table.push_row(row(&["b", "2"]));
    table.push_row(row(&["a", "10"]));
    table
}

#[allow(unused)]
pub fn row(texts: &[&str]) -> Row {
    Row::new(texts.iter().map(|t| Cell::new(*t)).collect())
}

/// Current top-to-bottom order of the first column, straight from the model.
#[allow(unused)]
pub fn first_column_order(harness: &TableHarness<'_>) -> Vec<String> {
    let (model, _) = harness.state();
    model
        .rows()
        .iter()
        .map(|row| row.cell(0).map_or(String::new(), |c| c.text().to_owned()))
        .collect()
}
