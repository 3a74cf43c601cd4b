use crate::error::RegressionError;
use crate::math::Matrix;
use crate::models::regressor_trait::{augment_inputs, FitState, Regressor};

/// Ordinary least squares solved with the normal equation.
///
/// BETA = (XᵀX)⁻¹ Xᵀ y on the intercept-augmented design matrix. A singular
/// XᵀX (e.g. collinear or too few rows) surfaces as
/// `RegressionError::Matrix(MatrixError::Singular)`.
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    state: FitState,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Regressor for LinearRegression {
    fn train(&mut self, x: &Matrix, y: &Matrix) -> Result<(), RegressionError> {
        let x_aug = augment_inputs(x, y)?;
        let x_t = x_aug.transpose();

        let gram_inv = x_t.matmul(&x_aug)?.inverse()?;
        let beta = gram_inv.matmul(&x_t)?.matmul(y)?;

        self.state = FitState::from_beta(&beta)?;
        log::debug!(
            "Fitted {} on {} rows x {} features, intercept {:.6}",
            self.name(),
            x.nrows(),
            x.ncols(),
            beta[(0, 0)]
        );
        Ok(())
    }

    fn state(&self) -> &FitState {
        &self.state
    }

    fn name(&self) -> &str {
        "linear_regression"
    }
}
