//! Word store
//!
//! Owns the mapping of English terms to meanings and registration timestamps.
//! Enforces the capacity ceiling and key uniqueness, and exposes only
//! validated mutation - no caller ever touches the backing sequence directly.
//!
//! Invariants:
//! - `entries` holds at most [`CAPACITY`] words, insertion order preserved.
//! - Every English term in `entries` has exactly one timestamp in
//!   `registered_at`, and vice versa.
//! - A failed operation performs no mutation at all.

use std::collections::HashMap;

use chrono::{DateTime, Local};
use log::debug;

use crate::error::{WordQuizError, WordQuizResult};
use crate::models::WordEntry;

/// Maximum number of words a store will hold
pub const CAPACITY: usize = 100;

/// The default flashcards a fresh interactive session starts with
const DEFAULT_WORDS: [(&str, &str); 5] = [
    ("apple", "사과"),
    ("elephant", "코끼리"),
    ("pear", "배"),
    ("strawberry", "딸기"),
    ("tiger", "호랑이"),
];

/// In-memory store of vocabulary flashcards
#[derive(Debug, Default)]
pub struct WordStore {
    entries: Vec<WordEntry>,
    registered_at: HashMap<String, DateTime<Local>>,
}

impl WordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with the default word set, each entry
    /// stamped with the given registration time
    pub fn with_default_words(now: DateTime<Local>) -> Self {
        let mut store = Self::new();
        for (english, korean) in DEFAULT_WORDS {
            // The defaults fit well under capacity and have unique keys,
            // so this cannot fail.
            let _ = store.add(english, korean, now);
        }
        store
    }

    /// Number of words currently stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no words
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry exists for the given English term
    pub fn contains(&self, english: &str) -> bool {
        self.entries.iter().any(|e| e.english == english)
    }

    /// Add a new word.
    ///
    /// Rejects with `CapacityExceeded` when the store is full and with
    /// `Duplicate` when the English term is already registered. On success
    /// the entry is appended and its registration time recorded.
    pub fn add(
        &mut self,
        english: &str,
        korean: &str,
        now: DateTime<Local>,
    ) -> WordQuizResult<()> {
        if self.entries.len() >= CAPACITY {
            return Err(WordQuizError::CapacityExceeded { capacity: CAPACITY });
        }
        if self.contains(english) {
            return Err(WordQuizError::Duplicate {
                word: english.to_string(),
            });
        }

        self.entries.push(WordEntry::new(english, korean));
        self.registered_at.insert(english.to_string(), now);
        debug!("added word '{}' ({} stored)", english, self.entries.len());
        Ok(())
    }

    /// Remove a word by its English term.
    ///
    /// When `expected_meaning` is supplied it must equal the stored meaning,
    /// otherwise the call fails with `MeaningMismatch` and nothing changes.
    /// Returns the removed entry.
    pub fn remove(
        &mut self,
        english: &str,
        expected_meaning: Option<&str>,
    ) -> WordQuizResult<WordEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.english == english)
            .ok_or_else(|| WordQuizError::NotFound {
                word: english.to_string(),
            })?;

        if let Some(expected) = expected_meaning {
            if self.entries[index].korean != expected {
                return Err(WordQuizError::MeaningMismatch {
                    word: english.to_string(),
                    expected: expected.to_string(),
                });
            }
        }

        let removed = self.entries.remove(index);
        self.registered_at.remove(english);
        debug!("removed word '{}' ({} stored)", english, self.entries.len());
        Ok(removed)
    }

    /// Replace the meaning of an existing word, keeping its English term and
    /// registration timestamp.
    ///
    /// Check order mirrors the registration guards: the term must exist, must
    /// not itself be some other entry's meaning (which would indicate the
    /// caller swapped the word and meaning arguments), and the stored meaning
    /// must equal `expected_old_meaning`.
    pub fn update(
        &mut self,
        english: &str,
        expected_old_meaning: &str,
        new_meaning: &str,
    ) -> WordQuizResult<()> {
        let index = self
            .entries
            .iter()
            .position(|e| e.english == english)
            .ok_or_else(|| WordQuizError::NotFound {
                word: english.to_string(),
            })?;

        let swapped_arguments = self
            .entries
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && e.korean == english);
        if swapped_arguments {
            return Err(WordQuizError::EnglishExpected {
                word: english.to_string(),
            });
        }

        if self.entries[index].korean != expected_old_meaning {
            return Err(WordQuizError::MeaningMismatch {
                word: english.to_string(),
                expected: expected_old_meaning.to_string(),
            });
        }

        self.entries[index].korean = new_meaning.to_string();
        debug!("updated meaning of '{}'", english);
        Ok(())
    }

    /// Read-only copy of the stored entries, safe for the caller to shuffle
    pub fn snapshot(&self) -> Vec<WordEntry> {
        self.entries.clone()
    }

    /// Registration timestamp of a word, if it is stored
    pub fn timestamp_of(&self, english: &str) -> Option<DateTime<Local>> {
        self.registered_at.get(english).copied()
    }
}
