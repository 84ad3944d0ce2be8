//! Confirmation modal for destructive row actions.

use egui::{Color32, RichText, Ui, Window};
use gridkit_states::TableModel;

use crate::widgets::table::state::TableUiState;

/// Shows the delete confirmation modal while a delete is pending.
///
/// The row leaves the model only when the user confirms; Cancel and closing
/// the window both leave the table untouched.
pub fn confirm_delete_modal(ui: &mut Ui, model: &mut TableModel, state: &mut TableUiState) {
    let Some(index) = state.pending_delete() else {
        return;
    };

    // Lead with the first cell so the user sees which row is about to go.
    let description = model
        .rows()
        .get(index)
        .and_then(|row| row.cell(0))
        .map_or_else(|| format!("row {}", index + 1), |cell| cell.text().to_owned());

    let mut open = true;

    Window::new("Delete row")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label(format!("Delete \"{description}\"? This cannot be undone."));
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    state.close_action();
                }

                let delete_button = egui::Button::new(RichText::new("Delete").color(Color32::WHITE))
                    .fill(Color32::from_rgb(178, 34, 34));
                if ui.add(delete_button).clicked() {
                    if model.remove_row(index).is_none() {
                        log::warn!("pending delete pointed at missing row {index}");
                    }
                    state.close_action();
                }
            });
        });

    if !open {
        state.close_action();
    }
}
