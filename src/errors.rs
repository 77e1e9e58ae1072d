use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HashError>;
