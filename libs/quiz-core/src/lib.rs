//! Flashcard drilling engine shared by the quiz front ends.
//!
//! Provides:
//! - Tab-separated deck parser and injectable resource sources
//! - Card sets with per-card mastery weights
//! - Quiz session state machine with weighted card selection
//! - Answer judging (exact for short answers, substring for long ones)
//! - Snapshot publication for front ends (watch channel and callbacks)

pub mod card_set;
pub mod error;
pub mod matching;
pub mod observer;
pub mod parser;
pub mod sampling;
pub mod session;
pub mod source;
pub mod types;

pub use card_set::CardSet;
pub use error::{QuizError, Result, SourceError};
pub use matching::{is_judgeable, judge};
pub use observer::QuizSnapshot;
pub use parser::{parse, ParsedDeck, SkipReason, SkippedLine};
pub use session::QuizSession;
pub use source::{load_deck, DeckEntry, DirectorySource, MemorySource, ResourceSource};
pub use types::{AnswerStatus, Card, QuizSettings};
