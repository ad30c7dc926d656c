//! Common test utilities for quiz-core integration tests.

#![allow(dead_code)]

pub mod fixtures;

use quiz_core::{CardSet, QuizSession};

/// Session over `cards` with a fixed seed.
pub fn seeded_session(cards: CardSet, seed: u64) -> QuizSession {
    QuizSession::seeded(cards, seed).expect("fixture card set is not empty")
}

/// Answer every card correctly until the session finishes.
///
/// Returns the number of judgments made.
pub fn drill_to_completion(session: &mut QuizSession) -> u32 {
    let mut judged = 0;
    while !session.is_finished() {
        if session.mark_known() {
            judged += 1;
        }
        session.advance();
    }
    judged
}

/// Mastered count must always equal the number of zero-weight cards.
pub fn assert_consistent(session: &QuizSession) {
    let snapshot = session.snapshot();
    assert_eq!(snapshot.mastered_count, session.cards().mastered());
    assert!(session.cards().weights().iter().all(|&w| w <= 2));
    assert!((0.0..=1.0).contains(&snapshot.success_rate));
    assert!(snapshot.current_index < snapshot.total_cards);
}
