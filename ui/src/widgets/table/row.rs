//! Row rendering for sortable tables.

use egui_extras::TableRow;
use gridkit_states::Row;

use super::cells::{render_copy_button, render_delete_button, render_value_cell};

/// Result of rendering a data row.
#[derive(Debug, Default)]
pub struct RowRenderResult {
    pub copy_clicked: bool,
    pub delete_clicked: bool,
}

/// Renders one data row: a value cell per model column, then the action
/// buttons.
#[inline]
pub fn render_table_row(
    row: &mut TableRow<'_, '_>,
    data: &Row,
    column_count: usize,
    copied: bool,
) -> RowRenderResult {
    let mut result = RowRenderResult::default();

    for index in 0..column_count {
        row.col(|ui| {
            let text = data.cell(index).map_or("", |cell| cell.text());
            render_value_cell(ui, text);
        });
    }

    row.col(|ui| {
        ui.horizontal(|ui| {
            if render_copy_button(ui, copied) {
                result.copy_clicked = true;
            }
            if render_delete_button(ui) {
                result.delete_clicked = true;
            }
        });
    });

    result
}

/// Flattens a row to the text that goes on the clipboard: cell texts joined
/// by tabs, pasteable into a spreadsheet.
pub fn row_clipboard_text(data: &Row) -> String {
    data.cells()
        .iter()
        .map(|cell| cell.text())
        .collect::<Vec<_>>()
        .join("\t")
}
