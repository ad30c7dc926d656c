//! Access to named deck resources.
//!
//! Front ends hand a [`ResourceSource`] to [`load_deck`] instead of reaching
//! for files directly, so decks can come from a directory, an embedded bundle
//! or a test fixture.

use crate::card_set::CardSet;
use crate::error::SourceError;
use crate::parser;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Something that can produce the raw bytes of a named resource.
pub trait ResourceSource {
    fn read(&self, name: &str) -> Result<Vec<u8>, SourceError>;
}

/// Read, decode and parse a deck. An empty result is returned as an empty
/// set; callers check [`CardSet::is_empty`] before starting a session.
pub fn load_deck<S: ResourceSource + ?Sized>(
    source: &S,
    name: &str,
) -> Result<CardSet, SourceError> {
    let bytes = source.read(name)?;
    let content = String::from_utf8(bytes).map_err(|_| SourceError::InvalidUtf8 {
        name: name.to_string(),
    })?;

    let deck = parser::parse(&content);
    if !deck.skipped.is_empty() {
        tracing::info!(
            deck = name,
            cards = deck.cards.len(),
            skipped = deck.skipped.len(),
            "loaded deck with skipped lines"
        );
    }
    Ok(deck.into_card_set())
}

/// A deck listed on the start screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub resource: String,
    pub title: String,
}

impl DeckEntry {
    /// Derive a display title from a resource name: `gre_words.txt` becomes
    /// `Gre Words`.
    pub fn from_resource(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        let stem = resource
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&resource);
        let title = stem
            .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");
        Self { resource, title }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Decks stored as files under a root directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All `*.txt` decks in the root, sorted by file name.
    pub fn catalog(&self) -> Result<Vec<DeckEntry>, SourceError> {
        let entries = std::fs::read_dir(&self.root).map_err(|source| SourceError::Io {
            name: self.root.display().to_string(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| SourceError::Io {
                name: self.root.display().to_string(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();

        Ok(names.into_iter().map(DeckEntry::from_resource).collect())
    }
}

impl ResourceSource for DirectorySource {
    fn read(&self, name: &str) -> Result<Vec<u8>, SourceError> {
        if name.is_empty() || name.contains(['/', '\\']) || name == ".." {
            return Err(SourceError::NotFound {
                name: name.to_string(),
            });
        }

        std::fs::read(self.root.join(name)).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SourceError::NotFound {
                name: name.to_string(),
            },
            _ => SourceError::Io {
                name: name.to_string(),
                source,
            },
        })
    }
}

/// Decks held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    resources: BTreeMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.resources.insert(name.into(), bytes.into());
    }

    pub fn catalog(&self) -> Vec<DeckEntry> {
        self.resources
            .keys()
            .cloned()
            .map(DeckEntry::from_resource)
            .collect()
    }
}

impl ResourceSource for MemorySource {
    fn read(&self, name: &str) -> Result<Vec<u8>, SourceError> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                name: name.to_string(),
            })
    }
}
