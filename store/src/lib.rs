//! Storage port for BaseLingo.
//!
//! Every backend (LMDB on disk, in-memory for testing) implements
//! [`KeyValueStore`]. The rest of the codebase depends only on the trait.

pub mod error;
pub mod kv;

pub use error::StoreError;
pub use kv::KeyValueStore;
