//! Quiz session machinery
//!
//! The timer, the per-session state, and the engine that drives the
//! question loop and the two outcome menus.

pub mod engine;
pub mod session;
pub mod timer;

pub use engine::{QuizEngine, SessionReport, DEFAULT_TIME_LIMIT_SECS};
pub use session::QuizSession;
pub use timer::Timer;
