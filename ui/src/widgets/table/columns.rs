//! Column layout for sortable tables.

use egui_extras::Column;
use gridkit_states::TableModel;

/// Fixed layout metrics for consistent table rendering
pub const ACTIONS_WIDTH: f32 = 140.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Builds the egui_extras column list for a table model.
///
/// Model columns with a width hint become fixed columns; the rest share the
/// remaining space. A trailing fixed column holds the per-row action buttons.
#[inline]
pub fn table_columns(model: &TableModel) -> Vec<Column> {
    let mut columns: Vec<Column> = model
        .columns()
        .iter()
        .map(|column| match column.width() {
            Some(width) => Column::exact(width),
            None => Column::remainder().at_least(80.0),
        })
        .collect();
    columns.push(Column::exact(ACTIONS_WIDTH));
    columns
}
