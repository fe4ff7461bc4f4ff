//! Roll sources: the engine's one external collaborator.
//!
//! The engine never touches entropy directly. Everything that rerolls a
//! die goes through [`RollService`], which makes game transitions
//! deterministic under a scripted source and reproducible under a seeded
//! one. The contract matters for replay: a `Roll` command draws exactly
//! once per rerolled die, in ascending die-index order.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// External source of die rolls.
///
/// `next_roll(sides)` must return a value in `[1, sides]`. Implementations
/// are side-effecting (they consume entropy or a queued sequence), hence
/// `&mut self`.
pub trait RollService {
    /// Produce the next roll of a `sides`-sided die.
    fn next_roll(&mut self, sides: u8) -> u8;
}

/// Seeded deterministic roll source.
///
/// Uses ChaCha8 for speed with reproducible sequences: the same seed
/// always produces the same game given the same commands.
#[derive(Clone, Debug)]
pub struct SeededRolls {
    inner: ChaCha8Rng,
}

impl SeededRolls {
    /// Create a roll source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RollService for SeededRolls {
    fn next_roll(&mut self, sides: u8) -> u8 {
        self.inner.gen_range(1..=sides)
    }
}

/// Scripted roll source for tests and replays.
///
/// Pops from a queue of prepared values; once the queue is exhausted,
/// every roll reads `sides`.
#[derive(Clone, Debug, Default)]
pub struct FixedRolls {
    values: VecDeque<u8>,
}

impl FixedRolls {
    /// Create a scripted source from a value sequence.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Append more scripted values.
    pub fn queue(&mut self, values: impl IntoIterator<Item = u8>) {
        self.values.extend(values);
    }

    /// Number of scripted values not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RollService for FixedRolls {
    fn next_roll(&mut self, sides: u8) -> u8 {
        self.values.pop_front().unwrap_or(sides)
    }
}
