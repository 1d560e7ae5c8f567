//! One sitting of a lesson: pick an answer, then post proof.

use baselingo_miniapp::{Cast, Haptics, Notification, SocialPoster};

use crate::{proof_text, Lesson, LessonError};

/// Completion meter value once the proof is posted.
pub const COMPLETED_PERCENT: u8 = 100;
/// Completion meter value before that.
pub const IN_PROGRESS_PERCENT: u8 = 45;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

pub struct LessonSession<H, P> {
    lesson: Lesson,
    haptics: H,
    poster: P,
    selected: Option<String>,
    posted: bool,
}

impl<H: Haptics, P: SocialPoster> LessonSession<H, P> {
    pub fn new(lesson: Lesson, haptics: H, poster: P) -> Self {
        Self {
            lesson,
            haptics,
            poster,
            selected: None,
            posted: false,
        }
    }

    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_posted(&self) -> bool {
        self.posted
    }

    /// Choose an option. Answers can be changed freely until proof is posted.
    pub fn select(&mut self, option: &str) -> Result<AnswerOutcome, LessonError> {
        if self.posted {
            return Err(LessonError::AlreadyPosted);
        }
        if !self.lesson.has_option(option) {
            return Err(LessonError::UnknownOption(option.to_string()));
        }
        self.selected = Some(option.to_string());
        self.haptics.selection_changed();

        let outcome = if self.lesson.is_correct(option) {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        };
        tracing::debug!(option, ?outcome, day = self.lesson.day, "answer selected");
        Ok(outcome)
    }

    /// Post `sentence` as proof of the lesson. Requires a correct answer and
    /// succeeds at most once.
    pub async fn post_proof(&mut self, sentence: &str) -> Result<Cast, LessonError> {
        if self.posted {
            return Err(LessonError::AlreadyPosted);
        }
        let answered_correctly = self
            .selected
            .as_deref()
            .is_some_and(|s| self.lesson.is_correct(s));
        if !answered_correctly {
            return Err(LessonError::NotAnsweredCorrectly);
        }

        let cast = Cast::new(proof_text(sentence)).with_embed(self.lesson.proof_url.clone());
        if let Err(e) = self.poster.compose_cast(&cast).await {
            tracing::error!(error = %e, "proof post failed");
            self.haptics.notification_occurred(Notification::Error);
            return Err(e.into());
        }
        self.haptics.notification_occurred(Notification::Success);
        self.posted = true;
        tracing::info!(day = self.lesson.day, "lesson completed");
        Ok(cast)
    }

    /// Completion meter fill, in percent.
    pub fn progress(&self) -> u8 {
        if self.posted {
            COMPLETED_PERCENT
        } else {
            IN_PROGRESS_PERCENT
        }
    }
}
