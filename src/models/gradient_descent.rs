use log::Level;

use crate::error::RegressionError;
use crate::math::Matrix;
use crate::models::regressor_trait::{augment_inputs, FitState, Regressor};

/// Least squares fitted by full-batch gradient descent.
///
/// BETA starts at all ones and takes exactly `max_iter` steps of
/// `BETA -= learning_rate * Xᵀ(X·BETA - y) / n`; there is no convergence
/// check.
#[derive(Debug, Clone)]
pub struct LinearRegressionGD {
    learning_rate: f64,
    max_iter: usize,
    state: FitState,
}

impl LinearRegressionGD {
    /// Number of epochs between trace-level loss reports.
    const LOG_EVERY: usize = 1000;

    pub fn new(learning_rate: f64, max_iter: usize) -> Result<Self, RegressionError> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(RegressionError::InvalidLearningRate(learning_rate));
        }
        Ok(Self {
            learning_rate,
            max_iter,
            state: FitState::Untrained,
        })
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn max_iter(&self) -> usize {
        self.max_iter
    }
}

impl Regressor for LinearRegressionGD {
    fn train(&mut self, x: &Matrix, y: &Matrix) -> Result<(), RegressionError> {
        let x_aug = augment_inputs(x, y)?;
        let x_t = x_aug.transpose();
        let n = x_aug.nrows() as f64;

        let mut beta = Matrix::ones(x_aug.ncols(), 1);
        for epoch in 0..self.max_iter {
            let residual = x_aug.matmul(&beta)?.checked_sub(y)?;
            let gradient = x_t.matmul(&residual)? / n;
            beta = beta.checked_sub(&(gradient * self.learning_rate))?;

            if log::log_enabled!(Level::Trace) && (epoch + 1) % Self::LOG_EVERY == 0 {
                let mse = residual.powi(2).sum() / n;
                log::trace!("epoch {}/{}: mse {:.6e}", epoch + 1, self.max_iter, mse);
            }
        }

        self.state = FitState::from_beta(&beta)?;
        log::debug!(
            "Fitted {} on {} rows x {} features in {} epochs (learning rate {})",
            self.name(),
            x.nrows(),
            x.ncols(),
            self.max_iter,
            self.learning_rate
        );
        Ok(())
    }

    fn state(&self) -> &FitState {
        &self.state
    }

    fn name(&self) -> &str {
        "linear_regression_gd"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_learning_rate() {
        for rate in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                LinearRegressionGD::new(rate, 10),
                Err(RegressionError::InvalidLearningRate(_))
            ));
        }
    }

    #[test]
    fn test_zero_iterations_keeps_initial_beta() {
        let x = Matrix::from([[1.0], [2.0]]);
        let y = Matrix::column_vector(vec![5.0, 7.0]);
        let mut model = LinearRegressionGD::new(0.1, 0).unwrap();
        model.train(&x, &y).unwrap();
        assert_eq!(model.intercept(), Some(1.0));
        assert_eq!(model.coef().unwrap(), &Matrix::ones(1, 1));
    }

    #[test]
    fn test_single_step_matches_hand_computation() {
        // X_aug = [[1, 1], [1, 2]], beta = [1, 1], X·beta = [2, 3], residual = [-3, -4]
        // gradient = Xᵀ r / 2 = [-3.5, -5.5]
        let x = Matrix::from([[1.0], [2.0]]);
        let y = Matrix::column_vector(vec![5.0, 7.0]);
        let mut model = LinearRegressionGD::new(0.1, 1).unwrap();
        model.train(&x, &y).unwrap();
        assert!((model.intercept().unwrap() - 1.35).abs() < 1e-12);
        assert!((model.coef().unwrap()[(0, 0)] - 1.55).abs() < 1e-12);
    }
}
