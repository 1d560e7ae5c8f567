use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("storage error: {0}")]
    Storage(#[from] baselingo_store::StoreError),

    #[error("failed to encode deposit record: {0}")]
    Encode(String),
}
