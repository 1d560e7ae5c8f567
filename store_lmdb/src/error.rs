use thiserror::Error;

#[derive(Debug, Error)]
pub enum LmdbError {
    #[error("LMDB error: {0}")]
    Heed(String),

    #[error("LMDB map is full")]
    MapFull,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<heed::Error> for LmdbError {
    fn from(e: heed::Error) -> Self {
        match e {
            heed::Error::Mdb(heed::MdbError::MapFull) => LmdbError::MapFull,
            heed::Error::Io(io) => LmdbError::Io(io),
            other => LmdbError::Heed(other.to_string()),
        }
    }
}

impl From<LmdbError> for baselingo_store::StoreError {
    fn from(e: LmdbError) -> Self {
        match e {
            LmdbError::MapFull => baselingo_store::StoreError::QuotaExceeded,
            other => baselingo_store::StoreError::Backend(other.to_string()),
        }
    }
}
