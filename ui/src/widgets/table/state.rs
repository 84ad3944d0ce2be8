//! UI-side state for a sortable table.
//!
//! The row order and the active sort column live in the model
//! ([`gridkit_states::TableModel`]); this record only holds what the widget
//! itself owes the next frame: a pending destructive action and the transient
//! "Copied" acknowledgement.

use chrono::{DateTime, Duration, Utc};

/// How long the copy button shows its acknowledgement.
pub const COPIED_FEEDBACK_SECONDS: i64 = 2;

/// Action type for row-level buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowAction {
    /// No action.
    #[default]
    None,
    /// Remove the row at this index, pending user confirmation.
    ConfirmDelete(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CopiedFeedback {
    pub(crate) row: usize,
    pub(crate) until: DateTime<Utc>,
}

/// Per-table widget state. One instance per rendered table; tables never
/// share it.
#[derive(Debug, Default)]
pub struct TableUiState {
    /// Current action being performed.
    pub(crate) current_action: RowAction,
    /// Which row's copy button shows "Copied", and until when.
    pub(crate) copied: Option<CopiedFeedback>,
}

impl TableUiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for confirmation before removing a row.
    pub fn request_delete(&mut self, row: usize) {
        self.current_action = RowAction::ConfirmDelete(row);
    }

    /// The row awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<usize> {
        match self.current_action {
            RowAction::ConfirmDelete(row) => Some(row),
            RowAction::None => None,
        }
    }

    /// Close the current action modal.
    pub fn close_action(&mut self) {
        self.current_action = RowAction::None;
    }

    /// Start the copy acknowledgement for a row.
    ///
    /// Takes `now` as a parameter for test mockability.
    pub fn mark_copied(&mut self, row: usize, now: DateTime<Utc>) {
        self.copied = Some(CopiedFeedback {
            row,
            until: now + Duration::seconds(COPIED_FEEDBACK_SECONDS),
        });
    }

    /// Whether the row's copy button currently shows the acknowledgement.
    pub fn is_copied(&self, row: usize, now: DateTime<Utc>) -> bool {
        matches!(self.copied, Some(feedback) if feedback.row == row && now < feedback.until)
    }

    /// Drops an expired acknowledgement. Called once per frame before
    /// rendering.
    pub fn expire_copied(&mut self, now: DateTime<Utc>) {
        if let Some(feedback) = self.copied
            && now >= feedback.until
        {
            self.copied = None;
        }
    }
}
