use thiserror::Error;

/// Persistence failure. Environment-caused and reported to the caller, who
/// decides whether to retry.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("result log version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("result store lock poisoned")]
    Poisoned,
}
