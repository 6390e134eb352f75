//! Error types for tombola-export.

use thiserror::Error;

/// All errors that can arise while writing the spreadsheet.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Workbook construction or save failure (includes underlying I/O).
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
