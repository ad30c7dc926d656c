//! Test fixtures and factory functions for creating decks.

use quiz_core::{Card, CardSet};

/// Generate tab-separated deck content with `num_cards` cards.
pub fn sample_deck_content(num_cards: usize) -> String {
    (0..num_cards)
        .map(|i| format!("Question {}?\tAnswer {}\n", i + 1, i + 1))
        .collect()
}

/// The two-card deck used throughout the session scenarios.
pub fn arithmetic_and_capitals() -> CardSet {
    CardSet::new(vec![("2+2", "4").into(), ("capital of France", "Paris").into()])
}

pub fn numbered_cards(num_cards: usize) -> CardSet {
    (0..num_cards)
        .map(|i| Card::new(format!("Question {}?", i + 1), format!("Answer {}", i + 1)))
        .collect()
}
