//! Quiz session state machine.
//!
//! A session serves one card at a time. The front end judges it with
//! [`QuizSession::submit_answer`], [`QuizSession::mark_known`] or
//! [`QuizSession::mark_unknown`], then moves on with [`QuizSession::advance`].
//! Correct judgments lower the card's weight; at weight zero the card is
//! mastered and never drawn again. Once every card is mastered the session
//! reports [`AnswerStatus::AllDone`].
//!
//! Judgments are only applied while the current card is `NotAttempted`, and
//! `advance` does nothing after `AllDone`. Ignored calls return `false` and
//! publish nothing.

use crate::card_set::CardSet;
use crate::error::{QuizError, Result};
use crate::matching;
use crate::observer::{Publisher, QuizSnapshot};
use crate::sampling;
use crate::types::{AnswerStatus, Card, QuizSettings};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;

/// One run over a fixed card set.
#[derive(Debug)]
pub struct QuizSession<R = StdRng> {
    cards: CardSet,
    settings: QuizSettings,
    current: usize,
    status: AnswerStatus,
    attempts: u32,
    success_rate: f64,
    mastered: usize,
    last_fault: Option<QuizError>,
    rng: R,
    publisher: Publisher,
}

impl QuizSession<StdRng> {
    /// Start a session with default settings and an OS-seeded generator.
    pub fn new(cards: CardSet) -> Result<Self> {
        Self::with_settings(cards, QuizSettings::default())
    }

    /// Start a session; `settings.seed` makes card selection reproducible.
    pub fn with_settings(cards: CardSet, settings: QuizSettings) -> Result<Self> {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(cards, settings, rng)
    }

    pub fn seeded(cards: CardSet, seed: u64) -> Result<Self> {
        Self::with_settings(
            cards,
            QuizSettings {
                seed: Some(seed),
                ..QuizSettings::default()
            },
        )
    }
}

impl<R: Rng> QuizSession<R> {
    /// Start a session drawing from the given generator.
    ///
    /// The first card is chosen uniformly. Fails only for an empty set.
    pub fn with_rng(cards: CardSet, settings: QuizSettings, mut rng: R) -> Result<Self> {
        if cards.is_empty() {
            return Err(QuizError::EmptyCardSet);
        }

        let mut last_fault = None;
        if let Err(fault) = cards.validate() {
            tracing::warn!(%fault, "card set failed validation");
            last_fault = Some(fault);
        }

        let current = rng.random_range(0..cards.size());
        let mastered = cards.mastered();
        let mut session = Self {
            cards,
            settings,
            current,
            status: AnswerStatus::NotAttempted,
            attempts: 0,
            success_rate: 1.0,
            mastered,
            last_fault,
            rng,
            publisher: Publisher::new(placeholder_snapshot()),
        };
        session.publish();

        tracing::debug!(
            cards = session.cards.size(),
            start = current,
            "quiz session started"
        );
        Ok(session)
    }

    /// Judge a typed answer against the current card.
    ///
    /// Input that fails [`matching::is_judgeable`] should be rejected by the
    /// caller; it is not re-checked here.
    pub fn submit_answer(&mut self, text: &str) -> bool {
        if !self.accepts_judgment() {
            return false;
        }

        let index = self.current;
        let verdict = self
            .cards
            .card_at(index)
            .and_then(|card| matching::judge(&card.answer, text, self.settings.min_match_len))
            .map_err(|fault| match fault {
                QuizError::EmptyAnswer { .. } => QuizError::EmptyAnswer { index },
                other => other,
            });

        let correct = match verdict {
            Ok(correct) => correct,
            Err(fault) => {
                self.record_fault(fault);
                false
            }
        };

        if correct {
            self.record_correct();
        } else {
            self.record_wrong();
        }
        self.publish();
        true
    }

    /// "I know it": count the current card as answered correctly.
    pub fn mark_known(&mut self) -> bool {
        if !self.accepts_judgment() {
            return false;
        }
        self.record_correct();
        self.publish();
        true
    }

    /// "No idea": count the current card as answered wrong.
    pub fn mark_unknown(&mut self) -> bool {
        if !self.accepts_judgment() {
            return false;
        }
        self.record_wrong();
        self.publish();
        true
    }

    /// Move to the next card, or finish once every card is mastered.
    pub fn advance(&mut self) -> bool {
        if self.status == AnswerStatus::AllDone {
            return false;
        }

        if self.mastered >= self.cards.size() {
            self.status = AnswerStatus::AllDone;
            tracing::info!(
                attempts = self.attempts,
                success_rate = self.success_rate,
                "all cards mastered"
            );
            self.publish();
            return true;
        }

        match sampling::sample_index(self.cards.weights(), &mut self.rng) {
            Ok(next) => {
                self.current = next;
                self.status = AnswerStatus::NotAttempted;
                tracing::debug!(card = next, "advanced");
            }
            Err(_) => {
                // Weights say everything is mastered but the counter disagrees.
                let actual = self.cards.mastered();
                self.record_fault(QuizError::WeightSumMismatch {
                    mastered: self.mastered,
                    total: self.cards.size(),
                });
                self.mastered = actual;
                self.status = AnswerStatus::AllDone;
            }
        }
        self.publish();
        true
    }

    /// Current state by value.
    pub fn snapshot(&self) -> QuizSnapshot {
        let (question, answer) = self
            .cards
            .card_at(self.current)
            .map(|card| (card.question.clone(), card.answer.clone()))
            .unwrap_or_default();

        QuizSnapshot {
            current_index: self.current,
            question,
            answer,
            answer_status: self.status,
            attempts: self.attempts,
            success_rate: self.success_rate,
            mastered_count: self.mastered,
            total_cards: self.cards.size(),
        }
    }

    /// Receiver that always holds the latest published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<QuizSnapshot> {
        self.publisher.subscribe()
    }

    /// Run `callback` after every effective change.
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: Fn(&QuizSnapshot) + Send + Sync + 'static,
    {
        self.publisher.register(Box::new(callback));
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_card(&self) -> Result<&Card> {
        self.cards.card_at(self.current)
    }

    pub fn answer_status(&self) -> AnswerStatus {
        self.status
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }

    pub fn mastered_count(&self) -> usize {
        self.mastered
    }

    pub fn is_finished(&self) -> bool {
        self.status == AnswerStatus::AllDone
    }

    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Most recent invariant violation, if any occurred.
    pub fn last_fault(&self) -> Option<&QuizError> {
        self.last_fault.as_ref()
    }

    fn accepts_judgment(&self) -> bool {
        if self.status != AnswerStatus::NotAttempted {
            tracing::debug!(status = ?self.status, "judgment ignored");
            return false;
        }
        true
    }

    fn record_correct(&mut self) {
        self.status = AnswerStatus::Correct;
        let previous = f64::from(self.attempts);
        self.attempts += 1;
        self.success_rate = (self.success_rate * previous + 1.0) / f64::from(self.attempts);

        if let Err(fault) = self.lower_weight() {
            self.record_fault(fault);
        }
    }

    fn record_wrong(&mut self) {
        self.status = AnswerStatus::Wrong;
        let previous = f64::from(self.attempts);
        self.attempts += 1;
        self.success_rate = (self.success_rate * previous) / f64::from(self.attempts);
    }

    /// Drop the current card's weight by one. A card already at zero stays
    /// there and is not counted as mastered a second time.
    fn lower_weight(&mut self) -> Result<()> {
        let weight = self.cards.weight_at(self.current)?;
        let Some(lowered) = weight.checked_sub(1) else {
            return Err(QuizError::InvalidWeight { value: -1 });
        };
        self.cards.set_weight(self.current, lowered)?;
        if lowered == 0 {
            self.mastered += 1;
        }
        Ok(())
    }

    fn record_fault(&mut self, fault: QuizError) {
        tracing::error!(%fault, card = self.current, "quiz invariant violated");
        self.last_fault = Some(fault);
    }

    fn publish(&self) {
        self.publisher.publish(self.snapshot());
    }

    #[cfg(test)]
    pub(crate) fn cards_mut(&mut self) -> &mut CardSet {
        &mut self.cards
    }

    #[cfg(test)]
    pub(crate) fn force_mastered_count(&mut self, mastered: usize) {
        self.mastered = mastered;
    }
}

fn placeholder_snapshot() -> QuizSnapshot {
    QuizSnapshot {
        current_index: 0,
        question: String::new(),
        answer: String::new(),
        answer_status: AnswerStatus::NotAttempted,
        attempts: 0,
        success_rate: 1.0,
        mastered_count: 0,
        total_cards: 0,
    }
}
