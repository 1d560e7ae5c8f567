//! Haptic feedback port.

use std::fmt;

/// Outcome class of a notification haptic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notification {
    Success,
    Warning,
    Error,
}

impl Notification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Notification::Success => "success",
            Notification::Warning => "warning",
            Notification::Error => "error",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fire-and-forget haptic feedback. Implementations must not fail.
pub trait Haptics {
    fn notification_occurred(&self, kind: Notification);
    fn selection_changed(&self);
}

impl<T: Haptics + ?Sized> Haptics for &T {
    fn notification_occurred(&self, kind: Notification) {
        (**self).notification_occurred(kind)
    }

    fn selection_changed(&self) {
        (**self).selection_changed()
    }
}

/// Haptics for hosts without a vibration motor: emits a trace event instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn notification_occurred(&self, kind: Notification) {
        tracing::debug!(%kind, "haptic notification");
    }

    fn selection_changed(&self) {
        tracing::debug!("haptic selection changed");
    }
}
