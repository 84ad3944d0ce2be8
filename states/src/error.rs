use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("column index {index} out of range for table with {columns} columns")]
    ColumnOutOfRange { index: usize, columns: usize },
}

impl Error {
    pub fn column_out_of_range(index: usize, columns: usize) -> Self {
        Self::ColumnOutOfRange { index, columns }
    }
}
