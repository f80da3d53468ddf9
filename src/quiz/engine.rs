//! Quiz engine
//!
//! Drives a full quiz session as an explicit iterative state machine:
//!
//! ```text
//! Questioning -> SuccessMenu | FailMenu -> Questioning (restart) | Finished
//! ```
//!
//! Each question gets one attempt plus a single retry after a wrong (but not
//! timed-out) answer. The per-question time budget is measured after the
//! blocking read returns; see [`Timer`]. The outcome menus are bounded loops,
//! never recursive self-calls, and all store mutation goes through the
//! validated [`WordStore`] operations.

use log::debug;
use rand::Rng;

use crate::console::{Clock, Console};
use crate::error::WordQuizResult;
use crate::models::{is_valid_english, is_valid_meaning, WordEntry};
use crate::store::WordStore;

use super::session::QuizSession;
use super::timer::Timer;

/// Default per-question time budget in seconds
pub const DEFAULT_TIME_LIMIT_SECS: f64 = 5.0;

/// Outcome of a single answer attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttemptOutcome {
    /// Answer matched the meaning within the time budget
    Correct,
    /// Answer arrived but did not match
    Incorrect,
    /// Answer arrived after the time budget; no credit, no retry
    TimedOut,
}

/// State of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineState {
    Questioning,
    SuccessMenu,
    FailMenu,
    Finished,
}

/// Score of the last completed pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    /// Questions asked in the pass
    pub asked: usize,
    /// Questions answered correctly
    pub correct: usize,
}

/// Orchestrates quiz sessions against a word store
pub struct QuizEngine<'a, C: Console, K: Clock, R: Rng> {
    store: &'a mut WordStore,
    console: &'a mut C,
    clock: &'a K,
    rng: R,
    time_limit_secs: f64,
}

impl<'a, C: Console, K: Clock, R: Rng> QuizEngine<'a, C, K, R> {
    /// Create an engine with the default time budget
    pub fn new(store: &'a mut WordStore, console: &'a mut C, clock: &'a K, rng: R) -> Self {
        Self::with_time_limit(store, console, clock, rng, DEFAULT_TIME_LIMIT_SECS)
    }

    /// Create an engine with a custom per-question time budget
    pub fn with_time_limit(
        store: &'a mut WordStore,
        console: &'a mut C,
        clock: &'a K,
        rng: R,
        time_limit_secs: f64,
    ) -> Self {
        Self {
            store,
            console,
            clock,
            rng,
            time_limit_secs,
        }
    }

    /// Run sessions until the user exits from one of the outcome menus.
    ///
    /// Returns the score of the last completed pass.
    pub fn run(&mut self) -> WordQuizResult<SessionReport> {
        let mut session = QuizSession::new(self.store.snapshot(), &mut self.rng);
        let mut report = SessionReport { asked: 0, correct: 0 };
        let mut state = EngineState::Questioning;

        loop {
            state = match state {
                EngineState::Questioning => {
                    self.play(&mut session)?;
                    report = SessionReport {
                        asked: session.len(),
                        correct: session.correct_count(),
                    };
                    if session.all_correct() {
                        debug!("pass complete: all {} correct", session.len());
                        EngineState::SuccessMenu
                    } else {
                        debug!(
                            "pass complete: {}/{} correct",
                            session.correct_count(),
                            session.len()
                        );
                        EngineState::FailMenu
                    }
                }
                EngineState::SuccessMenu => self.success_menu(&mut session)?,
                EngineState::FailMenu => self.fail_menu(&mut session)?,
                EngineState::Finished => break,
            };
        }

        Ok(report)
    }

    /// Ask every question of the current roster and print the score report
    fn play(&mut self, session: &mut QuizSession) -> WordQuizResult<()> {
        self.console.write_line("")?;
        self.console.write_line("Let's play the word quiz!")?;

        let roster = session.roster().to_vec();
        for (idx, entry) in roster.iter().enumerate() {
            let number = idx + 1;
            match self.attempt(number, entry, false)? {
                AttemptOutcome::Correct => session.record_correct(),
                AttemptOutcome::TimedOut => {}
                AttemptOutcome::Incorrect => {
                    self.console
                        .write_line("Wrong. Here is one more chance.")?;
                    match self.attempt(number, entry, true)? {
                        AttemptOutcome::Correct => session.record_correct(),
                        AttemptOutcome::TimedOut => {}
                        AttemptOutcome::Incorrect => {
                            self.console
                                .write_line("Wrong. Moving on to the next question.")?;
                        }
                    }
                }
            }
        }

        if session.all_correct() {
            self.console
                .write_line("Congratulations! You answered every question correctly!")?;
        } else {
            self.console.write_line(&format!(
                "You got {} out of {} questions right.",
                session.correct_count(),
                session.len()
            ))?;
        }
        Ok(())
    }

    /// Present one question (or its retry) and classify the answer.
    ///
    /// The timer starts when the prompt is issued and is read after the
    /// blocking input returns; an over-budget answer is classified
    /// `TimedOut` no matter what text arrived.
    fn attempt(
        &mut self,
        number: usize,
        entry: &WordEntry,
        is_retry: bool,
    ) -> WordQuizResult<AttemptOutcome> {
        if is_retry {
            self.console
                .write_line(&format!("[Question {} - retry]", number))?;
        } else {
            self.console.write_line(&format!("[Question {}]", number))?;
        }

        let timer = Timer::start(self.clock);
        let answer = self.console.prompt(&format!(
            "What does '{}' mean? (answer within {} seconds): ",
            entry.english, self.time_limit_secs
        ))?;
        let elapsed = timer.elapsed_secs(self.clock);

        if elapsed > self.time_limit_secs {
            self.console
                .write_line("Time is up. Moving on to the next question.")?;
            Ok(AttemptOutcome::TimedOut)
        } else if entry.is_correct_answer(&answer) {
            self.console.write_line("Correct!")?;
            Ok(AttemptOutcome::Correct)
        } else {
            Ok(AttemptOutcome::Incorrect)
        }
    }

    /// Discard the session and build a fresh one from the current store
    fn restart(&mut self, session: &mut QuizSession) {
        *session = QuizSession::new(self.store.snapshot(), &mut self.rng);
        debug!("session restarted with {} words", session.len());
    }

    /// Menu shown when at least one question was missed
    fn fail_menu(&mut self, session: &mut QuizSession) -> WordQuizResult<EngineState> {
        let choice = self
            .console
            .prompt("Enter 0 to quit or 1 to try the quiz again: ")?;
        match choice.as_str() {
            "0" => {
                self.console.write_line("Exiting the quiz. Goodbye!")?;
                Ok(EngineState::Finished)
            }
            "1" => {
                self.restart(session);
                Ok(EngineState::Questioning)
            }
            // Unrecognized input re-presents the menu.
            _ => Ok(EngineState::FailMenu),
        }
    }

    /// Menu shown after a perfect pass: exit, edit the store, or re-quiz
    fn success_menu(&mut self, session: &mut QuizSession) -> WordQuizResult<EngineState> {
        let choice = self.console.prompt(
            "Enter 0 to quit, 1 to delete a word, 2 to change a meaning, \
             3 for another round (anything else adds a new word): ",
        )?;
        match choice.as_str() {
            "0" => {
                self.console.write_line("Exiting the quiz. Goodbye!")?;
                Ok(EngineState::Finished)
            }
            "1" => {
                self.delete_word()?;
                Ok(EngineState::SuccessMenu)
            }
            "2" => {
                self.change_meaning()?;
                Ok(EngineState::SuccessMenu)
            }
            "3" => {
                self.restart(session);
                Ok(EngineState::Questioning)
            }
            _ => {
                if self.add_word()? {
                    self.restart(session);
                    Ok(EngineState::Questioning)
                } else {
                    Ok(EngineState::SuccessMenu)
                }
            }
        }
    }

    /// SuccessMenu delete flow: term plus optional expected meaning
    fn delete_word(&mut self) -> WordQuizResult<()> {
        let english = self
            .console
            .prompt("Enter the English word to delete: ")?;
        let meaning = self
            .console
            .prompt("Enter its meaning (press Enter to skip the check): ")?;
        let expected = if meaning.is_empty() {
            None
        } else {
            Some(meaning.as_str())
        };

        match self.store.remove(&english, expected) {
            Ok(entry) => self
                .console
                .write_line(&format!("Word '{}' has been deleted.", entry.english)),
            Err(e) => self.console.write_line(&e.to_string()),
        }
    }

    /// SuccessMenu modify flow: term, current meaning, new meaning
    fn change_meaning(&mut self) -> WordQuizResult<()> {
        let english = self
            .console
            .prompt("Enter the English word to change: ")?;
        let old_meaning = self.console.prompt("Enter its current meaning: ")?;
        let new_meaning = self.console.prompt("Enter the new Korean meaning: ")?;

        match self.store.update(&english, &old_meaning, &new_meaning) {
            Ok(()) => self.console.write_line(&format!(
                "The meaning of '{}' is now '{}'.",
                english, new_meaning
            )),
            Err(e) => self.console.write_line(&e.to_string()),
        }
    }

    /// SuccessMenu add-word fallback: same validation as registration.
    ///
    /// Returns true when a word was committed, which triggers a re-quiz.
    /// Validation failure or a declined confirmation reports and keeps the
    /// user in the menu.
    fn add_word(&mut self) -> WordQuizResult<bool> {
        let english = self.console.prompt("Enter the English word to add: ")?;
        if !is_valid_english(&english) {
            self.console.write_line("Please enter an English word.")?;
            return Ok(false);
        }

        let korean = self
            .console
            .prompt(&format!("Enter the Korean meaning of '{}': ", english))?;
        if !is_valid_meaning(&korean) {
            self.console.write_line("Please enter a Korean meaning.")?;
            return Ok(false);
        }

        let confirm = self.console.prompt(&format!(
            "Is '{}' the meaning of '{}'? (y/n): ",
            korean, english
        ))?;
        if !confirm.eq_ignore_ascii_case("y") {
            self.console.write_line("Word registration cancelled.")?;
            return Ok(false);
        }

        match self.store.add(&english, &korean, self.clock.now()) {
            Ok(()) => {
                self.console
                    .write_line(&format!("Word '{}' has been registered.", english))?;
                Ok(true)
            }
            Err(e) => {
                self.console.write_line(&e.to_string())?;
                Ok(false)
            }
        }
    }
}
