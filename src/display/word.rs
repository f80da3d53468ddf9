//! Word list display formatting
//!
//! Formats the registered words with their registration timestamps as a
//! plain-text table for terminal output.

use crate::store::WordStore;

/// Timestamp format used in the word listing
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format the stored words with timestamps as a table
pub fn format_word_list(store: &WordStore) -> String {
    let entries = store.snapshot();
    if entries.is_empty() {
        return "No words registered.".to_string();
    }

    // Column widths by character count. Wide CJK glyphs make the meaning
    // column approximate, which is fine for a console listing.
    let word_width = entries
        .iter()
        .map(|e| e.english.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let meaning_width = entries
        .iter()
        .map(|e| e.korean.chars().count())
        .max()
        .unwrap_or(7)
        .max(7);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<word_width$}  {:<meaning_width$}  {}\n",
        "Word",
        "Meaning",
        "Registered",
        word_width = word_width,
        meaning_width = meaning_width,
    ));
    output.push_str(&format!(
        "{:-<word_width$}  {:-<meaning_width$}  {:-<19}\n",
        "",
        "",
        "",
        word_width = word_width,
        meaning_width = meaning_width,
    ));

    for entry in &entries {
        let registered = store
            .timestamp_of(&entry.english)
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_else(|| "unknown".to_string());

        output.push_str(&format!(
            "{:<word_width$}  {:<meaning_width$}  {}\n",
            entry.english,
            entry.korean,
            registered,
            word_width = word_width,
            meaning_width = meaning_width,
        ));
    }

    output.push_str(&format!("{} word(s) registered.", entries.len()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn test_empty_store() {
        let store = WordStore::new();
        assert_eq!(format_word_list(&store), "No words registered.");
    }

    #[test]
    fn test_listing_contains_words_and_timestamps() {
        let mut store = WordStore::new();
        let now = Local::now();
        store.add("apple", "사과", now).unwrap();
        store.add("pear", "배", now).unwrap();

        let listing = format_word_list(&store);
        assert!(listing.contains("apple"));
        assert!(listing.contains("사과"));
        assert!(listing.contains(&now.format(TIMESTAMP_FORMAT).to_string()));
        assert!(listing.contains("2 word(s) registered."));
    }
}
