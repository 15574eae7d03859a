use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found: {id}")]
    DocumentNotFound { id: Uuid },

    #[error("snapshot version {found} is newer than this build supports ({supported})")]
    UnsupportedSnapshot { found: u32, supported: u32 },

    #[error("store lock poisoned")]
    LockPoisoned,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
