//! Cryptographic primitives for BaseLingo.
//!
//! Only Ed25519 is needed: the wallet signs a human-readable message before
//! every deposit and withdrawal.

pub mod error;
pub mod keys;
pub mod sign;

pub use error::CryptoError;
pub use keys::{generate_keypair, keypair_from_private, keypair_from_seed, public_from_private};
pub use sign::{sign_message, verify_signature};
