//! Nullable clock: deterministic time for testing.

use baselingo_wallet_core::Clock;
use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// A deterministic clock. Time only advances when you tell it to.
pub struct NullClock {
    millis: AtomicI64,
}

impl NullClock {
    /// Start at `initial_secs` seconds after the Unix epoch.
    pub fn new(initial_secs: i64) -> Self {
        Self {
            millis: AtomicI64::new(initial_secs * 1000),
        }
    }

    /// Advance time by a number of seconds.
    pub fn advance(&self, secs: i64) {
        self.millis.fetch_add(secs * 1000, Ordering::SeqCst);
    }

    /// Set the time to a specific value.
    pub fn set(&self, secs: i64) {
        self.millis.store(secs * 1000, Ordering::SeqCst);
    }
}

impl Clock for NullClock {
    fn now_iso(&self) -> String {
        DateTime::<Utc>::from_timestamp_millis(self.millis.load(Ordering::SeqCst))
            .unwrap_or_default()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
