//! Nullable mini-app host: records haptics and posts.

use baselingo_miniapp::{Cast, Haptics, Notification, PostError, SocialPoster};
use std::sync::Mutex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HapticEvent {
    Notification(Notification),
    SelectionChanged,
}

/// Records haptic feedback instead of vibrating.
#[derive(Default)]
pub struct NullHaptics {
    events: Mutex<Vec<HapticEvent>>,
}

impl NullHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<HapticEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Only the notification events, in order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HapticEvent::Notification(kind) => Some(kind),
                HapticEvent::SelectionChanged => None,
            })
            .collect()
    }
}

impl Haptics for NullHaptics {
    fn notification_occurred(&self, kind: Notification) {
        self.events
            .lock()
            .unwrap()
            .push(HapticEvent::Notification(kind));
    }

    fn selection_changed(&self) {
        self.events.lock().unwrap().push(HapticEvent::SelectionChanged);
    }
}

/// Records casts instead of publishing them. Can be set to fail.
#[derive(Default)]
pub struct NullSocialPoster {
    posted: Mutex<Vec<Cast>>,
    failure: Mutex<Option<String>>,
}

impl NullSocialPoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        let poster = Self::new();
        poster.fail_with(Some(reason));
        poster
    }

    pub fn fail_with(&self, reason: Option<&str>) {
        *self.failure.lock().unwrap() = reason.map(str::to_string);
    }

    /// Casts that were accepted.
    pub fn posted(&self) -> Vec<Cast> {
        self.posted.lock().unwrap().clone()
    }
}

impl SocialPoster for NullSocialPoster {
    async fn compose_cast(&self, cast: &Cast) -> Result<(), PostError> {
        if let Some(reason) = self.failure.lock().unwrap().clone() {
            return Err(PostError::Rejected(reason));
        }
        self.posted.lock().unwrap().push(cast.clone());
        Ok(())
    }
}
