//! LMDB implementation of KeyValueStore.

use heed::types::Str;
use heed::{Database, Env};

use baselingo_store::{KeyValueStore, StoreError};

use crate::LmdbError;

/// Each call runs in its own transaction; writes are committed before the
/// call returns.
#[derive(Clone)]
pub struct LmdbKeyValueStore {
    env: Env,
    db: Database<Str, Str>,
}

impl LmdbKeyValueStore {
    pub(crate) fn new(env: Env, db: Database<Str, Str>) -> Self {
        Self { env, db }
    }
}

impl KeyValueStore for LmdbKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let value = self
            .db
            .get(&rtxn, key)
            .map_err(LmdbError::from)?
            .map(str::to_owned);
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        self.db
            .put(&mut wtxn, key, value)
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        let existed = self.db.delete(&mut wtxn, key).map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        if !existed {
            tracing::trace!(key, "remove on absent key");
        }
        Ok(())
    }
}
