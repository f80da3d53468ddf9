//! Quiz session state
//!
//! A session owns a shuffled snapshot of the store taken at the moment the
//! session (re)starts, plus the running score. It is discarded and rebuilt
//! on every restart so interim store edits become visible.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::WordEntry;

/// One pass over the flashcards: shuffled roster and score
#[derive(Debug)]
pub struct QuizSession {
    roster: Vec<WordEntry>,
    correct_count: usize,
}

impl QuizSession {
    /// Create a session from a store snapshot, shuffling the question order
    /// with the supplied randomness source
    pub fn new<R: Rng>(mut snapshot: Vec<WordEntry>, rng: &mut R) -> Self {
        snapshot.shuffle(rng);
        Self {
            roster: snapshot,
            correct_count: 0,
        }
    }

    /// The questions of this session, in presentation order
    pub fn roster(&self) -> &[WordEntry] {
        &self.roster
    }

    /// Number of questions in this session
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    /// Whether the session has no questions
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Number of correctly answered questions so far
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// Credit one correct answer
    pub fn record_correct(&mut self) {
        debug_assert!(self.correct_count < self.roster.len());
        self.correct_count += 1;
    }

    /// Whether every question of the roster was answered correctly
    pub fn all_correct(&self) -> bool {
        self.correct_count == self.roster.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_words() -> Vec<WordEntry> {
        vec![
            WordEntry::new("apple", "사과"),
            WordEntry::new("pear", "배"),
            WordEntry::new("tiger", "호랑이"),
        ]
    }

    #[test]
    fn test_roster_is_a_permutation_of_the_snapshot() {
        let mut rng = StdRng::seed_from_u64(7);
        let session = QuizSession::new(sample_words(), &mut rng);

        assert_eq!(session.len(), 3);
        for word in sample_words() {
            assert!(session.roster().contains(&word));
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = QuizSession::new(sample_words(), &mut StdRng::seed_from_u64(42));
        let b = QuizSession::new(sample_words(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a.roster(), b.roster());
    }

    #[test]
    fn test_score_tracking() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = QuizSession::new(sample_words(), &mut rng);

        assert_eq!(session.correct_count(), 0);
        assert!(!session.all_correct());

        session.record_correct();
        session.record_correct();
        session.record_correct();
        assert!(session.all_correct());
    }

    #[test]
    fn test_empty_roster_counts_as_all_correct() {
        let mut rng = StdRng::seed_from_u64(0);
        let session = QuizSession::new(Vec::new(), &mut rng);
        assert!(session.is_empty());
        assert!(session.all_correct());
    }
}
