use thiserror::Error;

/// Error type definitions
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[source] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[source] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[source] serde_json::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Unsupported source format: {0}")]
    UnsupportedFormat(String),

    #[error("Empty data: {0}")]
    EmptyData(String),
}

/// Result type alias using the crate's error type
pub type Result<T> = std::result::Result<T, Error>;
