//! Interactive start-up flow
//!
//! Coordinates the pre-quiz registration steps: user greeting, default
//! flashcard announcements, and new-word entry.

pub mod wizard;

pub use wizard::RegistrationWizard;
