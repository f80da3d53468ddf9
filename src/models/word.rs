//! Word entry model
//!
//! Represents a single flashcard: an English term and its Korean meaning.
//! The English term is the unique key within a store.

use std::fmt;

/// A single vocabulary flashcard entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// English term, the unique key within a store
    pub english: String,

    /// Korean meaning of the term
    pub korean: String,
}

impl WordEntry {
    /// Create a new word entry
    pub fn new(english: impl Into<String>, korean: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            korean: korean.into(),
        }
    }

    /// Whether an answer matches the stored meaning (case-sensitive, exact)
    pub fn is_correct_answer(&self, answer: &str) -> bool {
        answer == self.korean
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.english, self.korean)
    }
}

/// Validate an English term field: non-empty and ASCII-only.
///
/// This is the registration-flow guard that keeps meanings out of the key
/// field; callers re-prompt on failure rather than abort.
pub fn is_valid_english(term: &str) -> bool {
    !term.is_empty() && term.is_ascii()
}

/// Validate a meaning field: must contain at least one non-ASCII character.
///
/// Guards against typing the English word into the meaning prompt.
pub fn is_valid_meaning(meaning: &str) -> bool {
    !meaning.is_ascii()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_validation() {
        assert!(is_valid_english("apple"));
        assert!(is_valid_english("ice cream"));
        assert!(!is_valid_english(""));
        assert!(!is_valid_english("사과"));
        assert!(!is_valid_english("apple사과"));
    }

    #[test]
    fn test_meaning_validation() {
        assert!(is_valid_meaning("사과"));
        assert!(is_valid_meaning("사과 (과일)"));
        assert!(!is_valid_meaning("apple"));
        assert!(!is_valid_meaning(""));
    }

    #[test]
    fn test_answer_matching_is_exact() {
        let entry = WordEntry::new("apple", "사과");
        assert!(entry.is_correct_answer("사과"));
        assert!(!entry.is_correct_answer("사과 "));
        assert!(!entry.is_correct_answer("배"));
    }
}
