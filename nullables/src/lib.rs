//! Nullable infrastructure for deterministic testing.
//!
//! Every external dependency (local storage, wall clock, wallet signer,
//! mini-app host) is abstracted behind a trait. This crate provides
//! test-friendly implementations that:
//! - Return deterministic values
//! - Can be switched into failure modes programmatically
//! - Record what they were asked to do, for assertions
//! - Never touch the filesystem or network

pub mod clock;
pub mod miniapp;
pub mod signer;
pub mod store;

pub use clock::NullClock;
pub use miniapp::{HapticEvent, NullHaptics, NullSocialPoster};
pub use signer::NullSigner;
pub use store::NullKeyValueStore;
