use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Error type covering the different failure cases that can occur when the
/// tool loads, transforms, or writes the contact list.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Raised when the address book store cannot be opened or is not a
    /// readable SQLite database.
    #[error("failed to open address book store {}: {source}", path.display())]
    StoreConnection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Raised when the person/attribute join fails to execute or returns
    /// columns of an unexpected storage class.
    #[error("address book query failed: {0}")]
    Query(#[source] rusqlite::Error),

    /// Raised when a stored value cannot be converted into its output shape.
    #[error("invalid {column} value for person {person}: {reason}")]
    Transform {
        person: i64,
        column: &'static str,
        reason: String,
    },

    /// Raised when one of the output files cannot be written.
    #[error("failed to write {}: {source}", path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: SinkError,
    },

    /// Raised when the user provides a store path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when a configuration value cannot be interpreted.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Underlying cause of an [`ExportError::Sink`] failure.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Wrapper for IO failures such as staging or renaming files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when a cell exceeds the length Excel can store.
    #[error("{column} value in row {row} is {length} characters; Excel cells hold at most 32767")]
    CellTooLong {
        row: usize,
        column: String,
        length: usize,
    },

    /// Errors bubbled up from the CSV writer implementation.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

impl ExportError {
    /// Wraps a sink failure together with the path being written.
    pub fn sink(path: impl Into<PathBuf>, source: impl Into<SinkError>) -> Self {
        Self::Sink {
            path: path.into(),
            source: source.into(),
        }
    }
}
