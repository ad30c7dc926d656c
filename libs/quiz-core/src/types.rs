//! Core types shared by the quiz engine and its front ends.

use serde::{Deserialize, Serialize};

/// Number of correct judgments a card needs before it counts as mastered.
pub const INITIAL_WEIGHT: u8 = 2;

/// Default length threshold for substring matching.
pub const DEFAULT_MIN_MATCH_LEN: usize = 4;

/// A question/answer pair. Identity is the card's position in its set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

impl Card {
    /// Create a card from untrimmed text.
    pub fn new(question: impl AsRef<str>, answer: impl AsRef<str>) -> Self {
        Self {
            question: question.as_ref().trim().to_string(),
            answer: answer.as_ref().trim().to_string(),
        }
    }
}

impl<Q: AsRef<str>, A: AsRef<str>> From<(Q, A)> for Card {
    fn from((question, answer): (Q, A)) -> Self {
        Self::new(question, answer)
    }
}

/// Judgment state of the card currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerStatus {
    NotAttempted,
    Correct,
    Wrong,
    AllDone,
}

impl Default for AnswerStatus {
    fn default() -> Self {
        Self::NotAttempted
    }
}

impl AnswerStatus {
    /// Label shown next to the revealed answer.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotAttempted => "",
            Self::Correct => "Correct!",
            Self::Wrong => "Wrong",
            Self::AllDone => "All done!",
        }
    }
}

/// Tunables for a quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Answers at least this long are matched by substring, shorter ones exactly.
    pub min_match_len: usize,
    /// Seed for card selection. `None` seeds from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            min_match_len: DEFAULT_MIN_MATCH_LEN,
            seed: None,
        }
    }
}
