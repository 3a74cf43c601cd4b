use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Central configuration for models in the crate.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ModelConfig {
    #[serde(flatten)]
    pub model_type: ModelType,
}

/// Supported regression models and their hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelType {
    /// Closed-form ordinary least squares.
    LinearRegression,
    GradientDescent { learning_rate: f64, max_iter: usize },
}

impl Default for ModelType {
    fn default() -> Self {
        ModelType::LinearRegression
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ols" | "linear" | "linear_regression" => Ok(ModelType::LinearRegression),
            "gd" | "gradient_descent" => Ok(ModelType::GradientDescent {
                learning_rate: 0.01,
                max_iter: 1000,
            }),
            _ => Err(format!(
                "Unknown model type: {}. Valid options are: ols, gradient_descent",
                s
            )),
        }
    }
}

impl ModelConfig {
    pub fn new(model_type: ModelType) -> Self {
        Self { model_type }
    }
}

/// Settings for an end-to-end fit on a CSV data file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ExperimentConfig {
    pub model: ModelConfig,
    /// Fraction of rows used for training.
    pub train_size: f64,
    /// Seed for the train/test shuffle.
    pub random_state: u64,
    /// Whether the CSV's first line is a header.
    pub has_header: bool,
    /// Target column index; the last column when unset.
    pub target_column: Option<usize>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            train_size: 0.8,
            random_state: 42,
            has_header: true,
            target_column: None,
        }
    }
}

/// Load an [`ExperimentConfig`] from a JSON file.
pub fn load_experiment_config<P: AsRef<Path>>(path: P) -> Result<ExperimentConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ExperimentConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
