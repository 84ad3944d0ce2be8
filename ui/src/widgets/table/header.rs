//! Header rendering for sortable tables.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use gridkit_states::{Column, SortDirection, SortState};

/// Indicator glyphs for the active sort column.
const ASCENDING_GLYPH: &str = "⬆";
const DESCENDING_GLYPH: &str = "⬇";

/// Renders all header cells plus the trailing actions header.
///
/// Returns the index of the column whose header was clicked this frame, if
/// any. The indicator is rendered purely from `sort`: only the active column
/// carries a glyph, so activating a new column clears the previous one by
/// construction.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    columns: &[Column],
    sort: SortState,
) -> Option<usize> {
    let mut clicked = None;
    for (index, column) in columns.iter().enumerate() {
        header.col(|ui| {
            if render_header_cell(ui, column.title(), sort.direction_of(index)) {
                clicked = Some(index);
            }
        });
    }
    header.col(|ui| {
        ui.centered_and_justified(|ui| {
            ui.strong("Actions");
        });
    });
    clicked
}

/// Renders a single clickable header cell with its sort indicator.
#[inline]
fn render_header_cell(ui: &mut Ui, title: &str, direction: Option<SortDirection>) -> bool {
    let label = match direction {
        Some(SortDirection::Ascending) => format!("{title} {ASCENDING_GLYPH}"),
        Some(SortDirection::Descending) => format!("{title} {DESCENDING_GLYPH}"),
        None => title.to_owned(),
    };
    ui.centered_and_justified(|ui| {
        ui.add(Button::new(RichText::new(label).strong()).frame(false))
            .on_hover_text("Sort by this column")
            .clicked()
    })
    .inner
}
