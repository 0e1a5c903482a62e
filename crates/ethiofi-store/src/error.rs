//! Error types for storage operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Input file does not exist
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Filesystem error (directory creation, permissions)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Workbook could not be opened or a sheet could not be read
    #[error("Workbook read error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// Workbook could not be written
    #[error("Workbook write error: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Table shape cannot be written (e.g. too many rows or columns)
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
