//! # income-classifier 📊💵
//!
//! Predict whether a census respondent earns more than $50K a year using a
//! midpoint classifier trained on the UCI *adult* dataset.
//!
//! For every continuous attribute the classifier learns the midpoint between
//! the mean of the `>50K` group and the mean of the `<=50K` group. For every
//! categorical attribute it learns, per label, the midpoint between the share
//! of each group carrying that label. A record is classified by letting each
//! attribute vote and taking a strict majority of the votes cast.
//!
//! ## Features
//! - Cleaning of raw `adult.data` text with per-record rejection
//! - Order-independent, repeatable training over integer aggregates
//! - Explicit abstention for unknown (`?`) values
//! - Positional or seeded shuffled train/test split
//! - Benchmarkable with [Criterion](https://crates.io/crates/criterion)
//!
//! ## Example
//! ```no_run
//! use std::time::Duration;
//! use income_classifier::config::{DEFAULT_DATA_URL, EvaluatorConfig, SplitConfig};
//! use income_classifier::{classify_text, fetch};
//!
//! let text = fetch::fetch_text(DEFAULT_DATA_URL, Duration::from_secs(30)).unwrap();
//! let summary = classify_text(&text, &SplitConfig::default(), &EvaluatorConfig::default()).unwrap();
//! println!("Accuracy: {:.2}%", summary.evaluation.accuracy().unwrap() * 100.0);
//! ```

pub mod classifier;
pub mod clean;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod fetch;
pub mod record;
pub mod report;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub use classifier::{AttributeModel, ClassifierModel};
pub use config::{EvaluatorConfig, RunConfig, SplitConfig};
pub use error::{ClassifierError, Result};
pub use evaluate::{Evaluation, Evaluator, Vote};
pub use record::{Attribute, Income, Record, Value};

/// A helper type for holding train/test splits.
#[derive(Debug)]
pub struct DatasetSplit {
    pub train: Vec<Record>,
    pub test: Vec<Record>,
}

/// Splits a dataset so that the first `floor(len * train_ratio)` records are
/// used for training. With a seed the records are shuffled first.
pub fn train_test_split(data: &[Record], train_ratio: f64, seed: Option<u64>) -> DatasetSplit {
    let mut data = data.to_vec();
    if let Some(seed) = seed {
        let mut rng = StdRng::seed_from_u64(seed);
        data.shuffle(&mut rng);
    }

    let train_size = ((data.len() as f64) * train_ratio) as usize;
    let test = data.split_off(train_size.min(data.len()));

    DatasetSplit { train: data, test }
}

/// Result of one clean → split → train → evaluate run.
#[derive(Debug)]
pub struct RunSummary {
    pub model: ClassifierModel,
    pub evaluation: Evaluation,
    pub rejected: usize,
}

/// Runs the whole pipeline over raw census text.
pub fn classify_text(
    text: &str,
    split: &SplitConfig,
    evaluator: &EvaluatorConfig,
) -> Result<RunSummary> {
    split.validate()?;
    evaluator.validate()?;

    let cleaned = clean::clean_text(text);
    let DatasetSplit { train, test } =
        train_test_split(&cleaned.records, split.train_ratio, split.shuffle_seed);
    info!("🧠 Training on {} records, testing on {}", train.len(), test.len());

    let model = ClassifierModel::train_from_records(&train)?;
    let evaluation = Evaluator::new(&model, evaluator).evaluate_on(&test)?;

    Ok(RunSummary {
        model,
        evaluation,
        rejected: cleaned.rejected,
    })
}
