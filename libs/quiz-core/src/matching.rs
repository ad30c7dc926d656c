//! Answer judging for typed answers.
//!
//! Long answers (at least `min_len` characters) accept any contiguous piece of
//! the expected text, so "paris" and "pari" both match "Paris, France". Short
//! answers must match exactly. Both sides are compared trimmed and lower-cased.

use crate::error::QuizError;

/// Normalize text for comparison (trim and lower-case).
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Whether `given` is a correct answer for `expected`.
///
/// The length gate is not re-checked here: a short `given` against a long
/// `expected` is judged by substring alone. Front ends call [`is_judgeable`]
/// first to reject such input.
pub fn judge(expected: &str, given: &str, min_len: usize) -> Result<bool, QuizError> {
    let expected = normalize(expected);
    if expected.is_empty() {
        // Index is unknown at this level; the session fills it in.
        return Err(QuizError::EmptyAnswer { index: 0 });
    }
    let given = normalize(given);

    if expected.chars().count() >= min_len {
        Ok(expected.contains(given.as_str()))
    } else {
        Ok(expected == given)
    }
}

/// Caller-side gate: whether `given` is long enough to be judged at all.
pub fn is_judgeable(expected: &str, given: &str, min_len: usize) -> bool {
    let expected_len = normalize(expected).chars().count();
    let given_len = normalize(given).chars().count();

    if expected_len == 0 {
        return false;
    }
    if expected_len >= min_len {
        given_len >= min_len
    } else {
        given_len == expected_len
    }
}

/// Hint shown above the answer field.
pub fn answer_hint(expected: &str, min_len: usize) -> Option<String> {
    (normalize(expected).chars().count() > min_len)
        .then(|| format!("Any consecutive {} characters", min_len))
}
