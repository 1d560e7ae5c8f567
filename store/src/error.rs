use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("storage quota exceeded")]
    QuotaExceeded,

    #[error("storage backend error: {0}")]
    Backend(String),
}
