use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Encode error: {0}")]
    EncodeError(String),

    #[error("Invalid resolution: {0}")]
    InvalidResolution(String),

    #[error("Invalid frame: {0}")]
    InvalidFrame(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
