//! Shared helpers for integration tests.

pub mod fixtures;

use rand::rngs::StdRng;
use rand::SeedableRng;
use vocab_quiz_core::{QuizSession, VocabularyList};

/// Session over a fixed vocabulary with a seeded random source.
pub fn seeded_session(vocabulary: VocabularyList, seed: u64) -> QuizSession<VocabularyList, StdRng> {
    QuizSession::with_rng(vocabulary, StdRng::seed_from_u64(seed))
}
