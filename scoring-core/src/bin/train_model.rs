//! Train the credit default model and write the artifact the server loads.
//!
//! ```text
//! train_model --output model/model.json
//! train_model --data clients.csv --output model/model.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use credit_scoring_core::constants::{
    DEFAULT_DATASET_URL, DEFAULT_INVERSE_REGULARIZATION, DEFAULT_MODEL_PATH, DEFAULT_SEED,
    REFERENCE_SAMPLE_SIZE, TEST_FRACTION,
};
use credit_scoring_core::logic::dataset::load_source;
use credit_scoring_core::logic::training::{train, LogisticOptions, TrainingOptions};
use credit_scoring_core::ModelStore;

#[derive(Parser)]
#[command(name = "train_model")]
#[command(about = "Fit the credit default pipeline (scaler + logistic regression)")]
#[command(version)]
struct Cli {
    /// Spreadsheet (.xls/.xlsx) or CSV, as a local path or http(s) URL
    #[arg(short, long, default_value = DEFAULT_DATASET_URL)]
    data: String,

    /// Output artifact path
    #[arg(short, long, default_value = DEFAULT_MODEL_PATH)]
    output: PathBuf,

    /// Held-out fraction for evaluation
    #[arg(long, default_value_t = TEST_FRACTION)]
    test_size: f64,

    /// Random seed for the split and the reference sample
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Inverse L2 regularization strength
    #[arg(short = 'c', long, default_value_t = DEFAULT_INVERSE_REGULARIZATION)]
    inverse_regularization: f64,

    /// Maximum L-BFGS iterations
    #[arg(long, default_value_t = 100)]
    max_iter: u64,

    /// Rows kept as attribution baseline
    #[arg(long, default_value_t = REFERENCE_SAMPLE_SIZE)]
    reference_size: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let dataset = load_source(&cli.data).context("failed to load training data")?;

    let options = TrainingOptions {
        test_fraction: cli.test_size,
        seed: cli.seed,
        reference_size: cli.reference_size,
        logistic: LogisticOptions {
            c: cli.inverse_regularization,
            max_iter: cli.max_iter,
            ..Default::default()
        },
    };

    let report = train(&dataset, &options).context("training failed")?;
    log::info!("Model test accuracy: {:.4}", report.accuracy);

    // Refuse to write an artifact the server would reject
    ModelStore::from_artifact(report.artifact.clone()).context("trained model failed validation")?;

    report
        .artifact
        .save(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    log::info!("Saved trained model to {}", cli.output.display());

    Ok(())
}
