use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_MAX_LEVEL: usize = 16;
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Construction parameters for a [`SkipList`](crate::SkipList).
///
/// Both `max_level` and `probability` are fixed for the lifetime of the list.
/// When `seed` is set the level generator is deterministic, which makes the
/// resulting topology reproducible across runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkipListOptions {
    pub max_level: usize,
    pub probability: f64,
    pub seed: Option<u64>,
}

impl Default for SkipListOptions {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            probability: DEFAULT_PROBABILITY,
            seed: None,
        }
    }
}

impl SkipListOptions {
    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = max_level;
        self
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate(self.max_level, self.probability)
    }

    pub fn from_yaml(s: &str) -> Result<Self> {
        let options: SkipListOptions = serde_yaml::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let options: SkipListOptions = serde_json::from_str(s)?;
        options.validate()?;
        Ok(options)
    }
}

/// Range checks shared by the options and the level generator.
pub(crate) fn validate(max_level: usize, probability: f64) -> Result<()> {
    if max_level == 0 {
        return Err(Error::InvalidMaxLevel(max_level));
    }
    // written this way so NaN is rejected too
    if !(probability > 0.0 && probability < 1.0) {
        return Err(Error::InvalidProbability(probability));
    }
    Ok(())
}
