//! LMDB storage backend for BaseLingo.
//!
//! Implements [`baselingo_store::KeyValueStore`] using the `heed` LMDB
//! bindings. One environment holds a single named database of string keys
//! and string values.

pub mod environment;
pub mod error;
pub mod kv;

pub use environment::LmdbEnvironment;
pub use error::LmdbError;
pub use kv::LmdbKeyValueStore;
