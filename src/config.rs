//! Run parameters and their defaults.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ClassifierError, Result};

pub const DEFAULT_DATA_URL: &str =
    "http://archive.ics.uci.edu/ml/machine-learning-databases/adult/adult.data";

/// Share of the cleaned records used for training.
pub const DEFAULT_TRAIN_RATIO: f64 = 0.75;

/// A categorical score must exceed this to vote "above".
pub const DEFAULT_DISCRETE_VOTE_THRESHOLD: f64 = 0.05;

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Where the raw census text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Url(DEFAULT_DATA_URL.to_string())
    }
}

/// How cleaned records are divided into training and testing partitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitConfig {
    pub train_ratio: f64,
    /// Shuffle with this seed before splitting. `None` keeps file order.
    pub shuffle_seed: Option<u64>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig {
            train_ratio: DEFAULT_TRAIN_RATIO,
            shuffle_seed: None,
        }
    }
}

impl SplitConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.train_ratio > 0.0 && self.train_ratio < 1.0) {
            return Err(ClassifierError::invalid_config(format!(
                "train ratio must be in (0, 1), got {}",
                self.train_ratio
            )));
        }
        Ok(())
    }
}

/// Parameters of the vote on unseen records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluatorConfig {
    pub discrete_vote_threshold: f64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        EvaluatorConfig {
            discrete_vote_threshold: DEFAULT_DISCRETE_VOTE_THRESHOLD,
        }
    }
}

impl EvaluatorConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.discrete_vote_threshold) {
            return Err(ClassifierError::invalid_config(format!(
                "discrete vote threshold must be in [0, 1), got {}",
                self.discrete_vote_threshold
            )));
        }
        Ok(())
    }
}

/// Everything the binary needs for one fetch → clean → train → evaluate run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub source: DataSource,
    pub fetch_timeout: Duration,
    pub split: SplitConfig,
    pub evaluator: EvaluatorConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            source: DataSource::default(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            split: SplitConfig::default(),
            evaluator: EvaluatorConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        self.split.validate()?;
        self.evaluator.validate()?;
        if self.fetch_timeout.is_zero() {
            return Err(ClassifierError::invalid_config("fetch timeout must be non-zero"));
        }
        Ok(())
    }
}
