//! Interactive drill loop.
//!
//! Commands, one per line:
//! - any text: submit it as the answer
//! - `!know` / `!skip`: mark the card known / unknown
//! - empty line: next card
//! - `!quit`: stop

use crate::render::{self, OutputFormat};
use quiz_core::{matching, AnswerStatus, QuizSession};
use std::io::{BufRead, Write};

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Answer(&'a str),
    Know,
    Skip,
    Next,
    Quit,
}

fn parse_command(line: &str) -> Command<'_> {
    match line.trim() {
        "" => Command::Next,
        "!know" => Command::Know,
        "!skip" => Command::Skip,
        "!quit" => Command::Quit,
        text => Command::Answer(text),
    }
}

/// Run the loop until the deck is mastered, input ends, or the user quits.
pub fn run(
    session: &mut QuizSession,
    input: impl BufRead,
    out: &mut impl Write,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let min_len = session.settings().min_match_len;
    let mut rx = session.subscribe();
    render::snapshot(out, format, &rx.borrow_and_update(), min_len)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Command::Quit => break,
            Command::Next => {
                session.advance();
            }
            Command::Know => {
                session.mark_known();
            }
            Command::Skip => {
                session.mark_unknown();
            }
            Command::Answer(text) => {
                let expected = session.current_card()?.answer.clone();
                if session.answer_status() == AnswerStatus::NotAttempted
                    && !matching::is_judgeable(&expected, text, min_len)
                {
                    render::notice(out, format, "Answer too short to judge, try again.")?;
                    continue;
                }
                session.submit_answer(text);
            }
        }

        if rx.has_changed()? {
            let snap = rx.borrow_and_update().clone();
            render::snapshot(out, format, &snap, min_len)?;
            if snap.is_finished() {
                break;
            }
        }
    }

    tracing::info!(
        attempts = session.attempts(),
        mastered = session.mastered_count(),
        "drill ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::{Card, CardSet};
    use std::io::Cursor;

    fn one_card_session() -> QuizSession {
        QuizSession::seeded(CardSet::new(vec![Card::new("capital of France", "Paris")]), 1)
            .unwrap()
    }

    fn drive(session: &mut QuizSession, script: &str) -> String {
        let mut out = Vec::new();
        run(session, Cursor::new(script), &mut out, OutputFormat::Plain).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("  "), Command::Next);
        assert_eq!(parse_command("!know"), Command::Know);
        assert_eq!(parse_command(" paris "), Command::Answer("paris"));
    }

    #[test]
    fn short_answer_is_rejected_before_judging() {
        let mut session = one_card_session();
        let text = drive(&mut session, "par\n!quit\n");
        assert!(text.contains("Answer too short"));
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn drill_single_card_to_completion() {
        let mut session = one_card_session();
        let text = drive(&mut session, "paris\n\n!know\n\nnever read\n");
        assert!(session.is_finished());
        assert_eq!(session.attempts(), 2);
        assert!(text.contains("Correct! Paris"));
        assert!(text.contains("All done!"));
    }

    #[test]
    fn json_drill_reveals_answer_only_after_judgment() {
        let mut session = one_card_session();
        let mut out = Vec::new();
        run(&mut session, Cursor::new("!skip\n!quit\n"), &mut out, OutputFormat::Json).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["answer_status"], "not_attempted");
        assert!(lines[0]["answer"].is_null());
        assert!(!text.lines().next().unwrap().contains("Paris"));
        assert_eq!(lines[1]["answer_status"], "wrong");
        assert_eq!(lines[1]["answer"], "Paris");
    }

    #[test]
    fn json_short_answer_notice_stays_json() {
        let mut session = one_card_session();
        let mut out = Vec::new();
        run(&mut session, Cursor::new("par\n!quit\n"), &mut out, OutputFormat::Json).unwrap();
        let text = String::from_utf8(out).unwrap();
        for line in text.lines() {
            serde_json::from_str::<serde_json::Value>(line).unwrap();
        }
        assert!(text.contains("\"notice\""));
    }

    #[test]
    fn repeated_judgment_renders_nothing_new() {
        let mut session = one_card_session();
        let text = drive(&mut session, "!skip\n!know\n!quit\n");
        assert_eq!(session.attempts(), 1);
        assert_eq!(text.matches("Wrong Paris").count(), 1);
    }
}
