use std::error::Error;
use std::fmt;

use crate::math::MatrixError;

/// Usage and shape errors raised by the splitter and the regression models.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// `predict` or `score` called before `train`.
    NotTrained,
    InvalidTrainSize(f64),
    InvalidLearningRate(f64),
    RowCountMismatch { x_rows: usize, y_rows: usize },
    TargetShape {
        expected: (usize, usize),
        found: (usize, usize),
    },
    Matrix(MatrixError),
}

impl fmt::Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegressionError::NotTrained => {
                write!(f, "model is not trained, call train() before predict() or score()")
            }
            RegressionError::InvalidTrainSize(size) => {
                write!(f, "invalid train size {}, expected a value in [0, 1]", size)
            }
            RegressionError::InvalidLearningRate(rate) => {
                write!(f, "invalid learning rate {}, must be positive", rate)
            }
            RegressionError::RowCountMismatch { x_rows, y_rows } => write!(
                f,
                "X and y must have the same number of rows ({} vs {})",
                x_rows, y_rows
            ),
            RegressionError::TargetShape { expected, found } => write!(
                f,
                "target must have shape {}x{}, got {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            RegressionError::Matrix(e) => write!(f, "{}", e),
        }
    }
}

impl Error for RegressionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RegressionError::Matrix(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MatrixError> for RegressionError {
    fn from(e: MatrixError) -> Self {
        RegressionError::Matrix(e)
    }
}
