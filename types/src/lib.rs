//! Fundamental types for BaseLingo.
//!
//! Everything here is plain data: the single persisted deposit record and the
//! Ed25519 key/signature newtypes the wallet layer passes around.

pub mod keys;
pub mod record;

pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use record::DepositRecord;
