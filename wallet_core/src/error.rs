use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("ledger error: {0}")]
    Ledger(#[from] baselingo_ledger::LedgerError),

    #[error("signing error: {0}")]
    Signing(String),

    #[error("key error: {0}")]
    Key(String),

    #[error("key file already exists: {}", .0.display())]
    KeyFileExists(PathBuf),

    #[error("invalid deposit amount {amount}: must be a finite number of at least {min}")]
    InvalidAmount { amount: f64, min: f64 },

    #[error("a deposit of {amount} is already active; withdraw it first")]
    AlreadyDeposited { amount: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
