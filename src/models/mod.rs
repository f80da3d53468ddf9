//! Core data models for wordquiz
//!
//! This module contains the data structures that represent the flashcard
//! domain: word entries and their field validation rules.

pub mod word;

pub use word::{is_valid_english, is_valid_meaning, WordEntry};
