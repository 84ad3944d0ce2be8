//! Sortable table widget.
//!
//! The widget renders a [`gridkit_states::TableModel`] and feeds header
//! clicks back into it; it never orders rows itself. Split into focused
//! components:
//! - `columns`: egui_extras column layout from the model's width hints
//! - `header`: clickable header cells with the sort indicator
//! - `row`, `cells`: data rows with copy/delete buttons
//! - `state`: per-table widget state (pending delete, copy acknowledgement)

pub mod cells;
pub mod columns;
pub mod header;
pub mod row;
pub mod state;

use chrono::Utc;
use egui::Ui;
use egui_extras::TableBuilder;
use gridkit_states::TableModel;

use self::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use self::header::render_table_header;
use self::row::{render_table_row, row_clipboard_text};
use self::state::TableUiState;
use crate::utils::clipboard::copy_text;
use crate::widgets::confirm_delete_modal;

/// Renders a sortable table for `model`, with per-row copy and delete
/// buttons.
///
/// Clicking a header advances the model's sort state: ascending on first
/// click, descending on the second, back to ascending after that; clicking a
/// different header starts that column ascending and clears the previous
/// indicator. Deletes go through a confirmation modal before touching the
/// model.
///
/// The caller owns both the model and the widget state; dropping them is the
/// whole cleanup. Embedding several tables in one `Ui` needs a `push_id`
/// wrapper per table so their scroll areas get distinct ids.
pub fn sortable_table(ui: &mut Ui, model: &mut TableModel, ui_state: &mut TableUiState) {
    let now = Utc::now();
    ui_state.expire_copied(now);

    let mut clicked_column: Option<usize> = None;
    let mut copy_requested: Option<usize> = None;
    let mut delete_requested: Option<usize> = None;

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    for column in table_columns(model) {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            clicked_column = render_table_header(&mut header, model.columns(), model.sort_state());
        })
        .body(|body| {
            let column_count = model.columns().len();
            body.rows(ROW_HEIGHT, model.rows().len(), |mut table_row| {
                let index = table_row.index();
                let result = render_table_row(
                    &mut table_row,
                    &model.rows()[index],
                    column_count,
                    ui_state.is_copied(index, now),
                );
                if result.copy_clicked {
                    copy_requested = Some(index);
                }
                if result.delete_clicked {
                    delete_requested = Some(index);
                }
            });
        });

    if let Some(column) = clicked_column {
        // The model validates the index, so a stale header can log but never
        // panic the sort.
        match model.click_column(column) {
            Ok(sort) => log::debug!("table sorted: {sort:?}"),
            Err(err) => log::warn!("Header click ignored: {err}"),
        }
    }

    if let Some(index) = copy_requested
        && let Some(data) = model.rows().get(index)
        && copy_text(ui.ctx(), &row_clipboard_text(data))
    {
        ui_state.mark_copied(index, now);
    }

    if let Some(index) = delete_requested {
        ui_state.request_delete(index);
    }

    confirm_delete_modal(ui, model, ui_state);
}
