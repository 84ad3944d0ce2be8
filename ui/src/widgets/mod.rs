mod confirm;
pub mod table;

pub use confirm::confirm_delete_modal;
pub use table::state::{RowAction, TableUiState};
pub use table::sortable_table;
