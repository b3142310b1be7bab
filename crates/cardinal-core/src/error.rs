use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unsupported vCard version: {0}")]
    UnsupportedVersion(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
