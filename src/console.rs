//! Console and clock collaborators
//!
//! The quiz core never talks to stdin/stdout or the system clock directly;
//! it goes through the [`Console`] and [`Clock`] traits so the interactive
//! flows can be driven by scripted doubles in tests. The production
//! implementations are thin wrappers over the standard streams and
//! `chrono::Local`.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Local};

use crate::error::WordQuizResult;

/// Line-oriented console: one prompt in, one trimmed line out
pub trait Console {
    /// Write a full line of output
    fn write_line(&mut self, line: &str) -> WordQuizResult<()>;

    /// Write a prompt (no trailing newline) and block for one line of input,
    /// returned with surrounding whitespace trimmed
    fn prompt(&mut self, prompt: &str) -> WordQuizResult<String>;
}

/// Source of the current wall-clock time
pub trait Clock {
    /// Read the current local time
    fn now(&self) -> DateTime<Local>;
}

/// Console backed by the process stdin/stdout
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Create a stdin/stdout console
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn write_line(&mut self, line: &str) -> WordQuizResult<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", line)?;
        stdout.flush()?;
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> WordQuizResult<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }
}

/// Clock backed by the system time
#[derive(Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a system clock
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
