//! Parser for tab-separated deck files.
//!
//! # Format
//! ```text
//! capital of France<TAB>Paris
//! 2+2<TAB>4
//! ```
//!
//! One card per line. Lines without exactly one tab, or with an empty
//! question or answer after trimming, are skipped and reported.

use crate::card_set::CardSet;
use crate::types::Card;
use serde::Serialize;

/// Why a line did not become a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingTab,
    ExtraTabs,
    EmptyField,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    pub reason: SkipReason,
}

/// Cards read from a deck, plus the lines that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDeck {
    pub cards: Vec<Card>,
    pub skipped: Vec<SkippedLine>,
}

impl ParsedDeck {
    pub fn into_card_set(self) -> CardSet {
        CardSet::new(self.cards)
    }
}

/// Parse deck content into cards.
pub fn parse(content: &str) -> ParsedDeck {
    let mut deck = ParsedDeck::default();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        match parse_line(line) {
            Ok(card) => deck.cards.push(card),
            Err(reason) => {
                tracing::debug!(line = line_num, ?reason, "skipping deck line");
                deck.skipped.push(SkippedLine {
                    line: line_num,
                    reason,
                });
            }
        }
    }

    deck
}

fn parse_line(line: &str) -> Result<Card, SkipReason> {
    let mut parts = line.split('\t');
    let question = parts.next().unwrap_or_default();
    let answer = parts.next().ok_or(SkipReason::MissingTab)?;
    if parts.next().is_some() {
        return Err(SkipReason::ExtraTabs);
    }

    let card = Card::new(question, answer);
    if card.question.is_empty() || card.answer.is_empty() {
        return Err(SkipReason::EmptyField);
    }
    Ok(card)
}
