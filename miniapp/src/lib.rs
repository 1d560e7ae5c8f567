//! Ports to the social mini-app host.
//!
//! The host SDK offers two things BaseLingo uses: haptic feedback and a
//! "compose a post" action. Both are modelled as traits so the flows that
//! use them can run against recording doubles in tests and against simple
//! console implementations in the CLI.

pub mod haptics;
pub mod social;

pub use haptics::{Haptics, LogHaptics, Notification};
pub use social::{Cast, PostError, SocialPoster, StdoutPoster};
