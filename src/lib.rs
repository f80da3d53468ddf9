//! wordquiz - Terminal-based English vocabulary flashcard trainer
//!
//! This library provides the core functionality for the wordquiz trainer:
//! registering English/Korean flashcards, quizzing the user on them under a
//! per-question time budget, and branching into follow-up menus that can
//! edit the word set or restart the quiz.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (word entries and field validation)
//! - `store`: The in-memory word store with validated mutation
//! - `console`: Console and clock collaborator traits
//! - `quiz`: Timer, session state, and the quiz engine state machine
//! - `setup`: Interactive registration wizard
//! - `display`: Terminal output formatting
//!
//! All state is memory-resident and discarded on exit; there is no
//! persistence layer.

pub mod console;
pub mod display;
pub mod error;
pub mod models;
pub mod quiz;
pub mod setup;
pub mod store;

pub use error::{WordQuizError, WordQuizResult};
