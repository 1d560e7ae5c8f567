//! Wall clock port used to stamp deposits.

use chrono::{SecondsFormat, Utc};

pub trait Clock {
    /// Current UTC time as ISO-8601 with millisecond precision,
    /// e.g. `2025-03-01T12:00:00.000Z`.
    fn now_iso(&self) -> String;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_iso(&self) -> String {
        (**self).now_iso()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
