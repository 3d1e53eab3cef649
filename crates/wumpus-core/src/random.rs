//! The injectable randomness seam.
//!
//! Every random draw in the builder and the event chain goes through
//! [`RandomSource`], passed explicitly as a parameter. There is no ambient
//! or process-global random state, so any run is reproducible by supplying
//! the same source.

use std::collections::VecDeque;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A source of uniform random integers in a half-open range.
///
/// This is the sole non-determinism seam of the simulation. All draws use
/// the half-open convention `[min, max)`.
pub trait RandomSource {
    /// Draw a uniform integer `n` such that `min <= n < max`.
    ///
    /// Returns `min` when the range is empty.
    fn next_in_range(&mut self, min: u32, max: u32) -> u32;
}

/// A [`RandomSource`] backed by a seeded [`StdRng`].
///
/// The same seed always produces the same sequence of draws.
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a source seeded from the given value.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..max)
    }
}

/// A [`RandomSource`] that always returns the same value, ignoring the
/// requested range.
///
/// Useful for pinning a single probabilistic branch in tests, e.g. forcing
/// every pit roll to come up a survival.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub u32);

impl RandomSource for FixedRandom {
    fn next_in_range(&mut self, _min: u32, _max: u32) -> u32 {
        self.0
    }
}

/// A [`RandomSource`] that replays a scripted sequence of draws.
///
/// Once the sequence is exhausted, every further draw returns `min`. The
/// caller is responsible for scripting values that fall inside the ranges
/// the consuming code asks for.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: VecDeque<u32>,
}

impl SequenceRandom {
    /// Create a source that replays the given draws in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_in_range(&mut self, min: u32, _max: u32) -> u32 {
        self.values.pop_front().unwrap_or(min)
    }
}
