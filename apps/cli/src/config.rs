//! Application configuration.
//!
//! Values come from the environment (after loading `.env`), then command-line
//! flags override them.

use anyhow::Context;
use quiz_core::QuizSettings;
use std::path::PathBuf;

const DEFAULT_DECK_DIR: &str = "decks";

/// Settings resolved from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub deck_dir: PathBuf,
    pub quiz: QuizSettings,
}

/// Command-line values that take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub deck_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub min_match_len: Option<usize>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = QuizSettings::default();

        let deck_dir = lookup("UNIQUIZ_DECK_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DECK_DIR));

        let seed = lookup("UNIQUIZ_SEED")
            .map(|value| value.parse::<u64>())
            .transpose()
            .context("UNIQUIZ_SEED must be an unsigned integer")?;

        let min_match_len = lookup("UNIQUIZ_MIN_MATCH_LEN")
            .map(|value| value.parse::<usize>())
            .transpose()
            .context("UNIQUIZ_MIN_MATCH_LEN must be an unsigned integer")?
            .unwrap_or(defaults.min_match_len);

        Ok(Self {
            deck_dir,
            quiz: QuizSettings {
                min_match_len,
                seed,
            },
        })
    }

    /// Apply command-line overrides.
    pub fn merge(self, overrides: Overrides) -> Self {
        Self {
            deck_dir: overrides.deck_dir.unwrap_or(self.deck_dir),
            quiz: QuizSettings {
                min_match_len: overrides.min_match_len.unwrap_or(self.quiz.min_match_len),
                seed: overrides.seed.or(self.quiz.seed),
            },
        }
    }
}
