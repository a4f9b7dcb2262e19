//! Errors surfaced to callers of the hashing API

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BalloonError {
    #[error("Invalid parameters: {0}")]
    Params(#[from] balloon_core::Error),

    #[error("Text input cannot be encoded as UTF-8: {0}")]
    Encoding(String),

    #[error("Invalid options: {0}")]
    Options(#[from] serde_json::Error),

    #[error("Output length must be between 1 and {} bytes", crate::options::MAX_OUTPUT_LEN)]
    OutputLength,
}

pub type Result<T> = std::result::Result<T, BalloonError>;
