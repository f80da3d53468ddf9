//! Display formatting for terminal output
//!
//! Provides utilities for formatting the word store for terminal display.

pub mod word;

pub use word::format_word_list;
