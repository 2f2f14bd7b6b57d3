//! Error types for DCT2 operations

use thiserror::Error;

/// Result type for DCT2 operations
pub type Dct2Result<T> = Result<T, Dct2Error>;

/// Errors that can occur during transform, compression or benchmarking
#[derive(Error, Debug)]
pub enum Dct2Error {
    #[error("Invalid shape: {0}")]
    Shape(String),

    #[error("Invalid parameter: {0}")]
    Parameter(String),

    #[error("Duplicate benchmark size: {0}")]
    DuplicateSize(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
