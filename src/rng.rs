use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of randomness for battles and creature generation.
///
/// The engine owns exactly one of these. Swap in [`SeededRng`] or
/// [`ScriptedRng`] to make battle outcomes reproducible.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `[lo, hi)`.
    ///
    /// Callers guarantee `lo < hi`.
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32;

    /// Returns a uniformly distributed value in `[0.0, 1.0)`.
    fn next_fraction(&mut self) -> f32;

    /// Picks a uniformly random index into a collection of `len` items.
    fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot pick from an empty collection");
        let upper = i32::try_from(len).unwrap_or(i32::MAX);
        self.next_in_range(0, upper) as usize
    }
}

/// A real implementation of [`RandomSource`] backed by [`StdRng`].
///
/// Two generators created with the same seed produce the same sequence.
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    rng: StdRng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator from a fresh random seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// The seed this generator started from. Log it to replay a tournament.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRng {
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        self.rng.random_range(lo..hi)
    }

    fn next_fraction(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Replays a fixed list of outcomes, for tests that need a specific sequence.
///
/// `next_in_range(lo, hi)` yields `lo + outcome mod (hi - lo)`, so an outcome
/// of `1` always means "the second candidate". `next_fraction` yields
/// `outcome mod 100 / 100`.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    outcomes: VecDeque<i32>,
}

impl ScriptedRng {
    pub fn new(outcomes: Vec<i32>) -> Self {
        Self {
            outcomes: outcomes.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.outcomes.len()
    }

    fn next_outcome(&mut self, reason: &str) -> i32 {
        match self.outcomes.pop_front() {
            Some(outcome) => {
                tracing::trace!(outcome, reason, "scripted rng consumed");
                outcome
            }
            None => panic!(
                "ScriptedRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            ),
        }
    }
}

impl RandomSource for ScriptedRng {
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        let outcome = self.next_outcome("range");
        lo + outcome.rem_euclid(hi - lo)
    }

    fn next_fraction(&mut self) -> f32 {
        self.next_outcome("fraction").rem_euclid(100) as f32 / 100.0
    }
}
