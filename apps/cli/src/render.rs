//! Output formatting.

use quiz_core::{matching, Card, DeckEntry, QuizSnapshot};
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

pub fn catalog(out: &mut impl Write, format: OutputFormat, decks: &[DeckEntry]) -> anyhow::Result<()> {
    match format {
        OutputFormat::Plain => {
            for deck in decks {
                writeln!(out, "{:<24} {}", deck.resource, deck.title)?;
            }
        }
        OutputFormat::Json => {
            for deck in decks {
                writeln!(out, "{}", serde_json::to_string(deck)?)?;
            }
        }
    }
    Ok(())
}

pub fn cards<'a>(
    out: &mut impl Write,
    format: OutputFormat,
    cards: impl Iterator<Item = &'a Card>,
) -> anyhow::Result<()> {
    for (index, card) in cards.enumerate() {
        match format {
            OutputFormat::Plain => {
                writeln!(out, "Question: {}", card.question)?;
                writeln!(out, "Answer: {}", card.answer)?;
                writeln!(out)?;
            }
            OutputFormat::Json => {
                let line = serde_json::json!({ "index": index, "question": card.question, "answer": card.answer });
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}

/// Informational message, kept inside the JSON-lines stream in JSON mode.
pub fn notice(out: &mut impl Write, format: OutputFormat, message: &str) -> anyhow::Result<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{message}")?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::json!({ "notice": message }))?,
    }
    Ok(())
}

pub fn snapshot(
    out: &mut impl Write,
    format: OutputFormat,
    snap: &QuizSnapshot,
    min_match_len: usize,
) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        // The answer stays hidden until the card is judged.
        let line = serde_json::json!({
            "current_index": snap.current_index,
            "question": snap.question,
            "answer": snap.revealed_answer(),
            "answer_status": snap.answer_status,
            "attempts": snap.attempts,
            "success_rate": snap.success_rate,
            "mastered_count": snap.mastered_count,
            "total_cards": snap.total_cards,
        });
        writeln!(out, "{line}")?;
        return Ok(());
    }

    writeln!(
        out,
        "Success: {}%    Learned: {}/{}",
        snap.success_percent(),
        snap.mastered_count,
        snap.total_cards
    )?;
    if snap.is_finished() {
        writeln!(out, "{}", snap.answer_status.label())?;
        return Ok(());
    }

    writeln!(out, "Q: {}", snap.question)?;
    match snap.revealed_answer() {
        Some(answer) => writeln!(out, "{} {}", snap.answer_status.label(), answer)?,
        None => {
            if let Some(hint) = matching::answer_hint(&snap.answer, min_match_len) {
                writeln!(out, "({hint})")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::AnswerStatus;

    fn snap(status: AnswerStatus) -> QuizSnapshot {
        QuizSnapshot {
            current_index: 0,
            question: "capital of France".to_string(),
            answer: "Paris".to_string(),
            answer_status: status,
            attempts: 3,
            success_rate: 2.0 / 3.0,
            mastered_count: 1,
            total_cards: 4,
        }
    }

    fn render(status: AnswerStatus, format: OutputFormat) -> String {
        let mut out = Vec::new();
        snapshot(&mut out, format, &snap(status), 4).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_hides_answer_before_judgment() {
        let text = render(AnswerStatus::NotAttempted, OutputFormat::Plain);
        assert!(text.contains("Success: 66%    Learned: 1/4"));
        assert!(text.contains("(Any consecutive 4 characters)"));
        assert!(!text.contains("Paris"));
    }

    #[test]
    fn plain_reveals_answer_after_judgment() {
        let text = render(AnswerStatus::Correct, OutputFormat::Plain);
        assert!(text.contains("Correct! Paris"));
    }

    #[test]
    fn json_hides_answer_before_judgment() {
        let text = render(AnswerStatus::NotAttempted, OutputFormat::Json);
        assert!(!text.contains("Paris"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value["answer"].is_null());
        assert_eq!(value["question"], "capital of France");
    }

    #[test]
    fn json_notice_is_an_object() {
        let mut out = Vec::new();
        notice(&mut out, OutputFormat::Json, "No usable content in gre.txt.").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["notice"], "No usable content in gre.txt.");
    }

    #[test]
    fn json_is_one_line() {
        let text = render(AnswerStatus::Wrong, OutputFormat::Json);
        assert_eq!(text.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["answer_status"], "wrong");
    }
}
