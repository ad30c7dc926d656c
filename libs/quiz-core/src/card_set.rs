//! Ordered cards with a parallel mastery-weight array.

use crate::error::{QuizError, Result};
use crate::types::{Card, INITIAL_WEIGHT};

/// Fixed collection of cards plus one mastery weight per card.
///
/// Cards never change after construction. Weights live in `0..=INITIAL_WEIGHT`:
/// 2 means unseen, 1 means answered correctly once, 0 means mastered.
#[derive(Debug, Clone, Default)]
pub struct CardSet {
    cards: Vec<Card>,
    weights: Vec<u8>,
}

impl CardSet {
    /// Build a set with every weight at its initial value.
    pub fn new(cards: Vec<Card>) -> Self {
        let weights = vec![INITIAL_WEIGHT; cards.len()];
        Self { cards, weights }
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card_at(&self, index: usize) -> Result<&Card> {
        self.cards.get(index).ok_or(QuizError::OutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    pub fn weight_at(&self, index: usize) -> Result<u8> {
        self.weights
            .get(index)
            .copied()
            .ok_or(QuizError::OutOfRange {
                index,
                len: self.weights.len(),
            })
    }

    /// Set a card's weight. Callers clamp into range before calling.
    pub fn set_weight(&mut self, index: usize, value: u8) -> Result<()> {
        if value > INITIAL_WEIGHT {
            return Err(QuizError::InvalidWeight {
                value: i32::from(value),
            });
        }
        let len = self.weights.len();
        let slot = self
            .weights
            .get_mut(index)
            .ok_or(QuizError::OutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    pub fn weights(&self) -> &[u8] {
        &self.weights
    }

    /// Number of cards whose weight has reached zero.
    pub fn mastered(&self) -> usize {
        self.weights.iter().filter(|&&w| w == 0).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// First card with an empty question or answer, if any.
    pub(crate) fn validate(&self) -> Result<()> {
        for (index, card) in self.cards.iter().enumerate() {
            if card.question.trim().is_empty() {
                return Err(QuizError::EmptyQuestion { index });
            }
            if card.answer.trim().is_empty() {
                return Err(QuizError::EmptyAnswer { index });
            }
        }
        Ok(())
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
