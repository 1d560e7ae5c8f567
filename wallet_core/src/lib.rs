//! Wallet core library for BaseLingo.
//!
//! Provides what the deposit screen needs around the ledger:
//! - A message-signing port and a local Ed25519 signer
//! - A plain JSON key file for the local signer
//! - A clock port for deposit timestamps
//! - The [`Vault`] deposit/withdraw flows, which only touch the ledger
//!   after the user's signature has been obtained

pub mod clock;
pub mod error;
pub mod keyfile;
pub mod signer;
pub mod vault;

pub use clock::{Clock, SystemClock};
pub use error::WalletError;
pub use keyfile::{load_key_file, save_key_file, KeyFile};
pub use signer::{LocalSigner, MessageSigner};
pub use vault::{
    deposit_message, withdraw_message, Deposit, Vault, Withdrawal, DEFAULT_MIN_DEPOSIT,
};
