//! Random height assignment for new nodes.
//!
//! Level 0 holds every node and each level above holds a random subset of the
//! one below. With promotion probability `p`, a new node reaches level `k`
//! with probability `p^(k-1) * (1 - p)`, truncated at the configured maximum.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::Result;
use crate::options::{self, SkipListOptions, DEFAULT_MAX_LEVEL, DEFAULT_PROBABILITY};

/// Picks the height of a freshly inserted node.
pub trait LevelGenerator {
    /// Largest height this generator returns.
    fn max_level(&self) -> usize;

    /// Height for a new node, always in `1..=self.max_level()`.
    fn random_level(&mut self) -> usize;
}

/// Geometric level generator owning its own random source.
#[derive(Debug, Clone)]
pub struct GeometricLevel<R = ChaCha8Rng> {
    max_level: usize,
    probability: f64,
    rng: R,
}

impl Default for GeometricLevel<ChaCha8Rng> {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            probability: DEFAULT_PROBABILITY,
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl GeometricLevel<ChaCha8Rng> {
    pub fn new(max_level: usize, probability: f64) -> Result<Self> {
        Self::with_rng(max_level, probability, ChaCha8Rng::from_entropy())
    }

    pub fn with_seed(max_level: usize, probability: f64, seed: u64) -> Result<Self> {
        Self::with_rng(max_level, probability, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_options(options: &SkipListOptions) -> Result<Self> {
        match options.seed {
            Some(seed) => Self::with_seed(options.max_level, options.probability, seed),
            None => Self::new(options.max_level, options.probability),
        }
    }
}

impl<R: Rng> GeometricLevel<R> {
    pub fn with_rng(max_level: usize, probability: f64, rng: R) -> Result<Self> {
        options::validate(max_level, probability)?;

        Ok(Self {
            max_level,
            probability,
            rng,
        })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl<R: Rng> LevelGenerator for GeometricLevel<R> {
    fn max_level(&self) -> usize {
        self.max_level
    }

    fn random_level(&mut self) -> usize {
        let mut level = 1;
        while level < self.max_level && self.rng.gen::<f64>() < self.probability {
            level += 1;
        }
        level
    }
}

/// Replays a fixed list of heights, for building exact topologies in tests.
#[cfg(test)]
pub(crate) struct Scripted {
    heights: Vec<usize>,
    pos: usize,
    max_level: usize,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(max_level: usize, heights: &[usize]) -> Self {
        Self {
            heights: heights.to_vec(),
            pos: 0,
            max_level,
        }
    }
}

#[cfg(test)]
impl LevelGenerator for Scripted {
    fn max_level(&self) -> usize {
        self.max_level
    }

    fn random_level(&mut self) -> usize {
        let level = self.heights[self.pos % self.heights.len()];
        self.pos += 1;
        level
    }
}
