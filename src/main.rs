use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use wordquiz::console::{Clock, StdConsole, SystemClock};
use wordquiz::quiz::{QuizEngine, DEFAULT_TIME_LIMIT_SECS};
use wordquiz::setup::RegistrationWizard;
use wordquiz::store::WordStore;

#[derive(Parser)]
#[command(
    name = "wordquiz",
    version,
    about = "Terminal-based English vocabulary flashcard trainer",
    long_about = "wordquiz registers English/Korean flashcard pairs, then quizzes \
                  you on them with a per-question time budget, a single retry per \
                  question, and follow-up menus for editing the word set or \
                  playing again. All words live in memory for the session only."
)]
struct Cli {
    /// Seed for the question-order shuffle (omit for a random order)
    #[arg(long)]
    seed: Option<u64>,

    /// Start with an empty word store instead of the default flashcards
    #[arg(long)]
    no_defaults: bool,

    /// Per-question time budget in seconds
    #[arg(long, default_value_t = DEFAULT_TIME_LIMIT_SECS)]
    time_limit: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let clock = SystemClock::new();
    let mut console = StdConsole::new();

    let mut store = if cli.no_defaults {
        WordStore::new()
    } else {
        WordStore::with_default_words(clock.now())
    };

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    RegistrationWizard::run(&mut store, &mut console, &clock)?;

    let report =
        QuizEngine::with_time_limit(&mut store, &mut console, &clock, rng, cli.time_limit)
            .run()?;
    log::debug!("final score: {}/{}", report.correct, report.asked);

    Ok(())
}
