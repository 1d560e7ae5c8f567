//! Lesson content.

use serde::{Deserialize, Serialize};

/// A single fill-in-the-blank question within a course of `total_days`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub day: u32,
    pub total_days: u32,
    /// The sentence with `___` marking the blank.
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
    /// Sentence suggested for the proof post.
    pub example_sentence: String,
    /// Link attached to the proof post.
    pub proof_url: String,
}

impl Lesson {
    /// Today's built-in lesson.
    pub fn daily() -> Self {
        Self {
            day: 9,
            total_days: 10,
            prompt: "Wo ist ___ bahnhof?".to_string(),
            options: vec!["der".to_string(), "die".to_string(), "das".to_string()],
            answer: "der".to_string(),
            example_sentence: "Wo ist der bahnhof".to_string(),
            proof_url: "https://linguavault.xyz/lesson/9".to_string(),
        }
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }
}

/// The text of a proof post for `sentence`.
pub fn proof_text(sentence: &str) -> String {
    format!(
        "Today I learnt the use of the correct article of bahnhoff, for eg I learnt the statement: \"{sentence}\" #LinguaVault"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_lesson_answer_is_one_of_the_options() {
        let lesson = Lesson::daily();
        assert!(lesson.has_option(&lesson.answer));
        assert!(lesson.is_correct("der"));
        assert!(!lesson.is_correct("das"));
        assert!(!lesson.has_option("den"));
    }

    #[test]
    fn proof_text_quotes_sentence() {
        assert_eq!(
            proof_text("Wo ist der bahnhof"),
            "Today I learnt the use of the correct article of bahnhoff, for eg I learnt the statement: \"Wo ist der bahnhof\" #LinguaVault"
        );
    }
}
