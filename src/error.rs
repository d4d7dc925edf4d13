//! Error types for dataset parsing

use thiserror::Error;

/// Errors that can occur while parsing an inline dataset
///
/// Every variant is fatal to the parse call that produced it; no partial
/// dataset is ever returned alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// The text contained no lines at all, so there is no header
    #[error("no header found")]
    HeaderMissing,

    /// A header segment does not follow the `Name[Role,Type]` grammar
    #[error("invalid header format in column {column}: {segment:?}")]
    HeaderFormatInvalid {
        /// 0-based index of the header segment
        column: usize,
        /// The trimmed segment text
        segment: String,
    },

    /// A data row's cell count disagrees with the header's column count
    #[error("row {row} has {found} cells, header declares {expected} columns")]
    RowSizeMismatch {
        /// 0-based index of the row among the body lines
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Error category without context, for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    HeaderMissing,
    HeaderFormatInvalid,
    RowSizeMismatch,
}

impl DatasetError {
    /// Get the category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DatasetError::HeaderMissing => ErrorKind::HeaderMissing,
            DatasetError::HeaderFormatInvalid { .. } => ErrorKind::HeaderFormatInvalid,
            DatasetError::RowSizeMismatch { .. } => ErrorKind::RowSizeMismatch,
        }
    }
}

/// Result type alias for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;
