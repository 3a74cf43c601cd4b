//! Goodness-of-fit scores for regression models.
use serde::{Deserialize, Serialize};

use crate::error::RegressionError;
use crate::math::Matrix;

/// Coefficient of determination and its adjusted variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionScore {
    pub r2: f64,
    pub adjusted_r2: f64,
}

/// Compute R² between observed targets and predictions.
///
/// R² = 1 - SS_res / SS_tot, where SS_tot is taken around the mean of
/// `y_true`. Constant targets make SS_tot zero and the result non-finite;
/// that value is returned as is.
///
/// # Arguments
///
/// * `y_true` - Observed targets.
/// * `y_pred` - Predictions, same shape as `y_true`.
pub fn r2_score(y_true: &Matrix, y_pred: &Matrix) -> Result<f64, RegressionError> {
    if y_true.shape() != y_pred.shape() {
        return Err(RegressionError::TargetShape {
            expected: y_pred.shape(),
            found: y_true.shape(),
        });
    }

    let centered = y_true - y_true.mean();
    let residual = y_true.checked_sub(y_pred)?;
    let ss_total = centered.hadamard(&centered)?.sum();
    let ss_residual = residual.hadamard(&residual)?.sum();

    Ok(1.0 - ss_residual / ss_total)
}

/// Adjust R² for `n_features` predictors fitted on `n_samples` rows.
///
/// No guard is applied when `n_samples - 1 - n_features` is zero or negative:
/// the division yields an infinite, NaN or sign-flipped value.
pub fn adjusted_r2(r2: f64, n_samples: usize, n_features: usize) -> f64 {
    let n = n_samples as f64;
    let k = n_features as f64;
    let dof = n - 1.0 - k;
    if dof <= 0.0 {
        log::warn!(
            "adjusted R² undefined for {} samples and {} features (degrees of freedom {})",
            n_samples,
            n_features,
            dof
        );
    }
    1.0 - (1.0 - r2) * (n - 1.0) / dof
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r2_perfect_fit() {
        let y = Matrix::column_vector(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(r2_score(&y, &y).unwrap(), 1.0);
    }

    #[test]
    fn test_r2_mean_prediction_is_zero() {
        let y = Matrix::column_vector(vec![1.0, 2.0, 3.0, 4.0]);
        let mean = Matrix::from_elem(4, 1, 2.5);
        assert!(r2_score(&y, &mean).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_r2_known_value() {
        let y = Matrix::column_vector(vec![3.0, -0.5, 2.0, 7.0]);
        let pred = Matrix::column_vector(vec![2.5, 0.0, 2.0, 8.0]);
        // ss_res = 1.5, ss_tot = 29.1875
        let expected = 1.0 - 1.5 / 29.1875;
        assert!((r2_score(&y, &pred).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_r2_shape_mismatch() {
        let y = Matrix::column_vector(vec![1.0, 2.0]);
        let pred = Matrix::column_vector(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            r2_score(&y, &pred),
            Err(RegressionError::TargetShape { .. })
        ));
    }

    #[test]
    fn test_r2_constant_target_is_not_finite() {
        let y = Matrix::from_elem(3, 1, 5.0);
        let pred = Matrix::column_vector(vec![4.0, 5.0, 6.0]);
        assert!(!r2_score(&y, &pred).unwrap().is_finite());
    }

    #[test]
    fn test_adjusted_r2() {
        let adj = adjusted_r2(0.9, 11, 2);
        assert!((adj - (1.0 - 0.1 * 10.0 / 8.0)).abs() < 1e-12);
        assert!(!adjusted_r2(0.5, 3, 2).is_finite());
    }
}
