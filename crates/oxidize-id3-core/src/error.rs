use thiserror::Error;

/// Error type shared by every oxidize-id3 crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Id3Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Model not fitted")]
    NotFitted,
}

pub type Id3Result<T> = Result<T, Id3Error>;
