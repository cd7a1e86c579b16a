use thiserror::Error;

/// Convenient result alias for the capacity sweep library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an imported table does not start with the expected header.
    #[error("unexpected capacity table header: expected {expected}, found {found}")]
    InvalidHeader { expected: String, found: String },

    /// Raised when an imported table does not begin with the all-zero origin row.
    #[error("capacity table is missing the origin row")]
    MissingOriginRow,

    /// Wrapper for IO errors (missing output directory, permission denied, disk full).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV encoding and decoding errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
