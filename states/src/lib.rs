//! Table sorting model: column types, per-table sort state, and stable
//! in-place row ordering. No UI dependency; the `gridkit-ui` crate renders
//! whatever this model says.

mod error;
mod sort;
mod table;

pub use error::Error;
pub use sort::{SortDirection, SortState, SortType};
pub use table::{Cell, Column, Row, TableModel};
