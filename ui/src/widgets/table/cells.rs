//! Cell rendering for sortable tables.

use egui::Ui;

/// Renders one data cell. A row shorter than the column list renders empty
/// cells for the columns it lacks.
#[inline]
pub fn render_value_cell(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(text);
    });
}

/// Renders the copy button, flipped to an acknowledgement while `copied`.
///
/// Returns `true` if a new copy was requested.
#[inline]
pub fn render_copy_button(ui: &mut Ui, copied: bool) -> bool {
    let text = if copied { "Copied ✔" } else { "Copy" };
    let clicked = ui
        .button(text)
        .on_hover_text("Copy this row to the clipboard")
        .clicked();
    clicked && !copied
}

/// Renders the delete button.
///
/// Returns `true` if the button was clicked.
#[inline]
pub fn render_delete_button(ui: &mut Ui) -> bool {
    ui.button("🗑").on_hover_text("Delete row").clicked()
}
