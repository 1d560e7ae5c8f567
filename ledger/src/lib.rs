//! Deposit ledger.
//!
//! A single storage slot holds at most one [`DepositRecord`]. A deposit
//! writes the slot, a withdrawal clears it; nothing is ever updated in place.
//! The withdrawable amount is the principal plus a fixed, mocked 3% yield,
//! computed from an already-loaded record without touching storage.

pub mod error;
pub mod ledger;
pub mod rounding;
pub mod withdrawable;

pub use baselingo_types::DepositRecord;
pub use error::LedgerError;
pub use ledger::{DepositLedger, DEPOSIT_KEY};
pub use rounding::round2;
pub use withdrawable::{compute_withdrawable, yield_for, YIELD_RATE};
