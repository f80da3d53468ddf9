//! Registration wizard
//!
//! Interactive start-up flow run before the first quiz pass: greets the
//! user, announces the default flashcards, and collects new words until the
//! `exit` sentinel. Field validation failures re-prompt rather than abort;
//! every committed word goes through [`WordStore::add`].

use crate::console::{Clock, Console};
use crate::display::word::format_word_list;
use crate::error::WordQuizResult;
use crate::models::{is_valid_english, is_valid_meaning};
use crate::store::WordStore;

/// The interactive registration flow
pub struct RegistrationWizard;

impl RegistrationWizard {
    /// Run the full start-up flow against the given store
    pub fn run<C: Console, K: Clock>(
        store: &mut WordStore,
        console: &mut C,
        clock: &K,
    ) -> WordQuizResult<()> {
        let student_id = console.prompt("Enter your student ID: ")?;
        let name = console.prompt("Enter your name: ")?;
        let date = clock.now().format("%m%d");

        console.write_line("")?;
        console.write_line(
            "==================== English Word Trainer ====================",
        )?;
        console.write_line(&format!("Student ID: {}", student_id))?;
        console.write_line(&format!("Name: {}", name))?;
        console.write_line(&format!("Date: {}", date))?;
        console.write_line(
            "==============================================================",
        )?;
        console.write_line("")?;

        // Announce the pre-loaded default flashcards.
        for entry in store.snapshot() {
            console.write_line(&format!(
                "Word '{}' has been registered.",
                entry.english
            ))?;
        }

        Self::collect_words(store, console, clock)?;

        console.write_line("")?;
        console.write_line("Registered words:")?;
        console.write_line(&format_word_list(store))?;
        Ok(())
    }

    /// Prompt for new words until the user types the exit sentinel
    fn collect_words<C: Console, K: Clock>(
        store: &mut WordStore,
        console: &mut C,
        clock: &K,
    ) -> WordQuizResult<()> {
        loop {
            let english = console
                .prompt("Enter a new English word (type 'exit' to start the quiz): ")?;
            if english.eq_ignore_ascii_case("exit") {
                return Ok(());
            }
            if !is_valid_english(&english) {
                console.write_line("Please enter an English word.")?;
                continue;
            }

            let korean = console
                .prompt(&format!("Enter the Korean meaning of '{}': ", english))?;
            if !is_valid_meaning(&korean) {
                console.write_line("Please enter a Korean meaning.")?;
                continue;
            }

            let confirm = console.prompt(&format!(
                "Is '{}' the meaning of '{}'? (y/n): ",
                korean, english
            ))?;
            if !confirm.eq_ignore_ascii_case("y") {
                console.write_line("Word registration cancelled.")?;
                continue;
            }

            match store.add(&english, &korean, clock.now()) {
                Ok(()) => {
                    console.write_line(&format!(
                        "Word '{}' has been registered.",
                        english
                    ))?;
                }
                Err(e) => console.write_line(&e.to_string())?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::doubles::{ManualClock, ScriptedConsole};

    fn run_wizard(store: &mut WordStore, inputs: &[&str]) -> ScriptedConsole {
        let mut console = ScriptedConsole::new(inputs);
        let clock = ManualClock::frozen();
        RegistrationWizard::run(store, &mut console, &clock).unwrap();
        console
    }

    #[test]
    fn test_exit_sentinel_ends_registration() {
        let mut store = WordStore::new();
        let console = run_wizard(&mut store, &["20250001", "Kim", "EXIT"]);

        assert!(store.is_empty());
        assert!(console.output_contains("Student ID: 20250001"));
        assert!(console.output_contains("Registered words:"));
    }

    #[test]
    fn test_confirmed_word_is_added() {
        let mut store = WordStore::new();
        let console = run_wizard(
            &mut store,
            &["1", "Kim", "grape", "포도", "y", "exit"],
        );

        assert!(store.contains("grape"));
        assert!(console.output_contains("Word 'grape' has been registered."));
    }

    #[test]
    fn test_non_ascii_word_reprompts() {
        let mut store = WordStore::new();
        let console = run_wizard(
            &mut store,
            &["1", "Kim", "포도", "grape", "포도", "y", "exit"],
        );

        // The Korean input for the word field is rejected, then the flow
        // re-prompts from the word field and succeeds.
        assert!(console.output_contains("Please enter an English word."));
        assert!(store.contains("grape"));
    }

    #[test]
    fn test_ascii_meaning_reprompts() {
        let mut store = WordStore::new();
        let console = run_wizard(
            &mut store,
            &["1", "Kim", "grape", "grape", "exit"],
        );

        assert!(console.output_contains("Please enter a Korean meaning."));
        assert!(!store.contains("grape"));
    }

    #[test]
    fn test_declined_confirmation_cancels() {
        let mut store = WordStore::new();
        let console = run_wizard(
            &mut store,
            &["1", "Kim", "grape", "포도", "n", "exit"],
        );

        assert!(console.output_contains("Word registration cancelled."));
        assert!(!store.contains("grape"));
    }

    #[test]
    fn test_duplicate_word_is_reported() {
        let mut store = WordStore::new();
        let console = run_wizard(
            &mut store,
            &["1", "Kim", "grape", "포도", "y", "grape", "머루", "y", "exit"],
        );

        assert!(console.output_contains("already registered"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].korean, "포도");
    }
}
