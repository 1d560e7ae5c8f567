//! The learning side of BaseLingo.
//!
//! A lesson is a single fill-in-the-blank question. Answering it correctly
//! unlocks a "proof" post to the social feed, and posting completes the
//! lesson.

pub mod error;
pub mod lesson;
pub mod session;

pub use error::LessonError;
pub use lesson::{proof_text, Lesson};
pub use session::{AnswerOutcome, LessonSession, COMPLETED_PERCENT, IN_PROGRESS_PERCENT};
