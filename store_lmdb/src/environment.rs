//! LMDB environment setup.

use std::path::{Path, PathBuf};

use heed::types::Str;
use heed::{Database, Env, EnvOpenOptions};

use crate::{LmdbError, LmdbKeyValueStore};

const KV_DB_NAME: &str = "kv";

/// Wraps the LMDB environment and the key-value database handle.
pub struct LmdbEnvironment {
    env: Env,
    kv_db: Database<Str, Str>,
    path: PathBuf,
}

impl LmdbEnvironment {
    /// Open or create an LMDB environment in the directory `path`.
    ///
    /// The directory is created if it does not exist. `map_size` is the
    /// maximum size of the memory map in bytes; writes beyond it fail with
    /// [`LmdbError::MapFull`].
    pub fn open(path: &Path, map_size: usize) -> Result<Self, LmdbError> {
        std::fs::create_dir_all(path)?;

        // SAFETY: the environment is opened once per directory by this
        // process and the memory map is never written to outside of heed.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(1)
                .open(path)?
        };

        let mut wtxn = env.write_txn()?;
        let kv_db: Database<Str, Str> = env.create_database(&mut wtxn, Some(KV_DB_NAME))?;
        wtxn.commit()?;

        tracing::debug!(path = %path.display(), map_size, "opened LMDB environment");

        Ok(Self {
            env,
            kv_db,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A key-value store handle backed by this environment.
    pub fn kv_store(&self) -> LmdbKeyValueStore {
        LmdbKeyValueStore::new(self.env.clone(), self.kv_db)
    }
}
