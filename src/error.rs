use std::result;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Invalid max level: {0}, must be at least 1")]
    InvalidMaxLevel(usize),
    #[error("Invalid promotion probability: {0}, must lie in (0, 1)")]
    InvalidProbability(f64),
    #[error("Invalid Configuration: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}

pub type Result<T> = result::Result<T, Error>;
