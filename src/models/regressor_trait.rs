use crate::error::RegressionError;
use crate::math::Matrix;
use crate::stats::{adjusted_r2, r2_score, RegressionScore};

/// Fitted parameters of a linear model.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FitState {
    #[default]
    Untrained,
    Trained { intercept: f64, coef: Matrix },
}

impl FitState {
    /// Split a `(k+1)×1` coefficient vector into intercept and slopes.
    pub(crate) fn from_beta(beta: &Matrix) -> Result<Self, RegressionError> {
        let intercept = beta.get(0, 0)?;
        let coef = beta.extract(1.., 0..1)?;
        Ok(FitState::Trained { intercept, coef })
    }

    pub fn is_trained(&self) -> bool {
        matches!(self, FitState::Trained { .. })
    }

    pub fn intercept(&self) -> Option<f64> {
        match self {
            FitState::Trained { intercept, .. } => Some(*intercept),
            FitState::Untrained => None,
        }
    }

    pub fn coef(&self) -> Option<&Matrix> {
        match self {
            FitState::Trained { coef, .. } => Some(coef),
            FitState::Untrained => None,
        }
    }

    /// `x · coef + intercept`.
    pub fn predict(&self, x: &Matrix) -> Result<Matrix, RegressionError> {
        match self {
            FitState::Trained { intercept, coef } => Ok(x.matmul(coef)? + *intercept),
            FitState::Untrained => Err(RegressionError::NotTrained),
        }
    }
}

/// Contract shared by the linear regression estimators.
///
/// Implementors only provide `train` and access to their [`FitState`];
/// prediction and scoring are derived from it.
pub trait Regressor {
    /// Fit on `x` (`n×k`) and targets `y` (`n×1`). Calling it again refits.
    fn train(&mut self, x: &Matrix, y: &Matrix) -> Result<(), RegressionError>;

    fn state(&self) -> &FitState;

    fn predict(&self, x: &Matrix) -> Result<Matrix, RegressionError> {
        self.state().predict(x)
    }

    /// R² and adjusted R² of the predictions for `x` against `y`.
    fn score(&self, x: &Matrix, y: &Matrix) -> Result<RegressionScore, RegressionError> {
        let y_pred = self.predict(x)?;
        if y.shape() != y_pred.shape() {
            return Err(RegressionError::TargetShape {
                expected: y_pred.shape(),
                found: y.shape(),
            });
        }

        let r2 = r2_score(y, &y_pred)?;
        let (n, k) = x.shape();
        Ok(RegressionScore {
            r2,
            adjusted_r2: adjusted_r2(r2, n, k),
        })
    }

    fn intercept(&self) -> Option<f64> {
        self.state().intercept()
    }

    fn coef(&self) -> Option<&Matrix> {
        self.state().coef()
    }

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "regressor"
    }
}

/// Check `y` is a single column paired with the rows of `x`, then prepend
/// the intercept column of ones to `x`.
pub(crate) fn augment_inputs(x: &Matrix, y: &Matrix) -> Result<Matrix, RegressionError> {
    if y.ncols() != 1 {
        return Err(RegressionError::TargetShape {
            expected: (x.nrows(), 1),
            found: y.shape(),
        });
    }
    if x.nrows() != y.nrows() {
        return Err(RegressionError::RowCountMismatch {
            x_rows: x.nrows(),
            y_rows: y.nrows(),
        });
    }
    Ok(x.insert_col(1.0, 0)?)
}
