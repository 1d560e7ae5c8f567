//! Shared utilities for BaseLingo.

pub mod logging;

pub use logging::{init_logging, LogFormat};
