use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid scale category: {0}")]
    InvalidCategory(String),

    #[error("invalid severity: {0}")]
    InvalidSeverity(String),

    #[error("invalid result id: {0}")]
    InvalidResultId(#[from] uuid::Error),
}
