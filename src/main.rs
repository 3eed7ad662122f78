use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use income_classifier::config::{
    DEFAULT_DATA_URL, DEFAULT_DISCRETE_VOTE_THRESHOLD, DEFAULT_FETCH_TIMEOUT_SECS,
    DEFAULT_TRAIN_RATIO, DataSource, EvaluatorConfig, RunConfig, SplitConfig,
};
use income_classifier::{classify_text, fetch, report};

/// Midpoint income classifier for the UCI adult census dataset
#[derive(Parser, Debug)]
#[command(name = "income-classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// URL to fetch the raw dataset from
    #[arg(long, default_value = DEFAULT_DATA_URL)]
    url: String,

    /// Read the raw dataset from a local file instead of fetching it
    #[arg(long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Share of records used for training
    #[arg(long, default_value_t = DEFAULT_TRAIN_RATIO)]
    train_ratio: f64,

    /// Score a category must exceed to vote ">50K"
    #[arg(long, default_value_t = DEFAULT_DISCRETE_VOTE_THRESHOLD)]
    vote_threshold: f64,

    /// Shuffle with this seed before splitting
    #[arg(long)]
    seed: Option<u64>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Print the learned thresholds and scores
    #[arg(long)]
    show_model: bool,
}

impl Args {
    fn to_config(&self) -> RunConfig {
        let source = match &self.file {
            Some(path) => DataSource::File(path.clone()),
            None => DataSource::Url(self.url.clone()),
        };
        RunConfig {
            source,
            fetch_timeout: Duration::from_secs(self.timeout_secs),
            split: SplitConfig {
                train_ratio: self.train_ratio,
                shuffle_seed: self.seed,
            },
            evaluator: EvaluatorConfig {
                discrete_vote_threshold: self.vote_threshold,
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.to_config();
    config.validate().context("invalid arguments")?;

    let text = fetch::load(&config.source, config.fetch_timeout)
        .context("failed to load the census dataset")?;

    let summary = classify_text(&text, &config.split, &config.evaluator)
        .context("classification run failed")?;
    if summary.rejected > 0 {
        warn!("{} records were rejected during cleaning", summary.rejected);
    }

    if args.show_model {
        report::print_model(&summary.model);
    }
    report::print_results(&summary.evaluation).context("cannot report accuracy")?;
    info!("Done");
    Ok(())
}
