use crate::config::{ModelConfig, ModelType};
use crate::error::RegressionError;
use crate::models::gradient_descent::LinearRegressionGD;
use crate::models::linear::LinearRegression;
use crate::models::regressor_trait::Regressor;

/// Build a boxed regressor from a `ModelConfig`.
pub fn build_model(params: &ModelConfig) -> Result<Box<dyn Regressor>, RegressionError> {
    match params.model_type {
        ModelType::LinearRegression => Ok(Box::new(LinearRegression::new())),
        ModelType::GradientDescent {
            learning_rate,
            max_iter,
        } => Ok(Box::new(LinearRegressionGD::new(learning_rate, max_iter)?)),
    }
}
