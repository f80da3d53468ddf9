//! Per-question timer
//!
//! Measures elapsed wall-clock time between prompt-issue and answer-receipt.
//! The blocking read is never interrupted: the elapsed time is computed only
//! after the input arrives, so a slow answer is denied credit after the fact
//! rather than being cut off.

use chrono::{DateTime, Local};

use crate::console::Clock;

/// Stopwatch started when a question is presented
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    started_at: DateTime<Local>,
}

impl Timer {
    /// Start timing at the clock's current instant
    pub fn start<K: Clock + ?Sized>(clock: &K) -> Self {
        Self {
            started_at: clock.now(),
        }
    }

    /// Seconds elapsed between the start instant and the clock's current
    /// instant
    pub fn elapsed_secs<K: Clock + ?Sized>(&self, clock: &K) -> f64 {
        let elapsed = clock.now().signed_duration_since(self.started_at);
        elapsed.num_milliseconds() as f64 / 1000.0
    }
}
