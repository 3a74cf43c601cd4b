//! End-to-end fit on a CSV file: load, split, train, score.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::ExperimentConfig;
use crate::data_handling::{split_features_target, train_test_split};
use crate::io::read_csv;
use crate::models::factory::build_model;
use crate::stats::RegressionScore;

/// Outcome of [`run_experiment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub model: String,
    pub intercept: f64,
    pub coef: Vec<f64>,
    pub score: RegressionScore,
    pub n_train: usize,
    pub n_test: usize,
}

/// Fit the configured model on `data_path` and score it on held-out rows.
///
/// The target is `config.target_column` (last column by default) and every
/// other column is a feature. A `train_size` of 1 leaves no rows to score
/// against and is rejected.
pub fn run_experiment<P: AsRef<Path>>(data_path: P, config: &ExperimentConfig) -> Result<ExperimentReport> {
    let data = read_csv(&data_path, config.has_header)?;
    if data.ncols() < 2 {
        return Err(anyhow!(
            "Need at least one feature and one target column, found {} columns",
            data.ncols()
        ));
    }

    let target_col = config.target_column.unwrap_or(data.ncols() - 1);
    let (x, y) = split_features_target(&data, target_col)
        .with_context(|| format!("Failed to select target column {}", target_col))?;

    let split = train_test_split(&x, &y, config.train_size, config.random_state)?
        .ok_or_else(|| anyhow!("train_size of 1 leaves no test rows to score"))?;
    log::info!(
        "Training on {} rows, testing on {} rows ({} features)",
        split.x_train.nrows(),
        split.x_test.nrows(),
        x.ncols()
    );

    let mut model = build_model(&config.model)?;
    model.train(&split.x_train, &split.y_train)?;
    let score = model.score(&split.x_test, &split.y_test)?;
    log::info!(
        "{}: R2 = {:.4}, adjusted R2 = {:.4}",
        model.name(),
        score.r2,
        score.adjusted_r2
    );

    let intercept = model.intercept().ok_or_else(|| anyhow!("Model was not trained"))?;
    let coef = model
        .coef()
        .map(|c| c.to_vec())
        .ok_or_else(|| anyhow!("Model was not trained"))?;

    Ok(ExperimentReport {
        model: model.name().to_string(),
        intercept,
        coef,
        score,
        n_train: split.x_train.nrows(),
        n_test: split.x_test.nrows(),
    })
}
