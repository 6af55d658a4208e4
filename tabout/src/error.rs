//! Error types for tabout

use thiserror::Error;

/// Errors that can occur while formatting tabular output
#[derive(Error, Debug)]
pub enum TaboutError {
    /// Format name is not in the supported set
    #[error("unknown output format: '{0}'")]
    InvalidFormat(String),

    /// A row's cell count does not match the header count
    #[error("row {row} has {found} columns, expected {expected}")]
    ColumnMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Option combination that cannot be applied
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error from the underlying CSV writer
    #[error("csv output error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
