use thiserror::Error;

/// Columns every data line must have: description and value.
pub const EXPECTED_COLUMNS: usize = 2;

/// Why a CSV text could not be turned into rows.
///
/// Row numbers count non-blank lines of the file as opened, header included,
/// so they can be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsvImportError {
    #[error("CSV file is empty")]
    EmptyFile,
    #[error("No data rows found after applying skip options")]
    NoDataRows,
    #[error("Row {row}: Expected 2 columns, found {found}")]
    ColumnCountMismatch { row: usize, found: usize },
    #[error("Row {row}: Column 2 must be a valid number, found \"{value}\"")]
    InvalidNumber { row: usize, value: String },
}

impl CsvImportError {
    pub fn row(&self) -> Option<usize> {
        match self {
            CsvImportError::ColumnCountMismatch { row, .. }
            | CsvImportError::InvalidNumber { row, .. } => Some(*row),
            CsvImportError::EmptyFile | CsvImportError::NoDataRows => None,
        }
    }
}
