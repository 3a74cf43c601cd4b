//! Helpers for turning a loaded data matrix into train/test sets.
//!
//! `train_test_split` shuffles features and targets with one shared row
//! permutation so that paired observations stay aligned, then cuts both at
//! the same row.
use crate::error::RegressionError;
use crate::math::{row_permutation, Matrix};

/// Train and test partitions of a feature matrix and its targets.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit {
    pub x_train: Matrix,
    pub x_test: Matrix,
    pub y_train: Matrix,
    pub y_test: Matrix,
}

impl TrainTestSplit {
    /// Unpack as `(x_train, x_test, y_train, y_test)`.
    pub fn into_parts(self) -> (Matrix, Matrix, Matrix, Matrix) {
        (self.x_train, self.x_test, self.y_train, self.y_test)
    }
}

/// Shuffle `x` and `y` with `seed` and split them into train and test rows.
///
/// The first `floor(rows * train_size)` shuffled rows form the training set.
///
/// # Arguments
///
/// * `x` - Feature matrix, one observation per row.
/// * `y` - Targets with the same number of rows as `x`.
/// * `train_size` - Fraction of rows used for training, in `[0, 1]`.
/// * `seed` - Seed for the row permutation.
///
/// # Returns
///
/// `Ok(None)` when `train_size == 1`: no split is performed since the test
/// set would be empty. Otherwise the four partitions.
pub fn train_test_split(
    x: &Matrix,
    y: &Matrix,
    train_size: f64,
    seed: u64,
) -> Result<Option<TrainTestSplit>, RegressionError> {
    if !(0.0..=1.0).contains(&train_size) {
        return Err(RegressionError::InvalidTrainSize(train_size));
    }

    if train_size == 1.0 {
        log::debug!("train_size is 1, skipping train/test split");
        return Ok(None);
    }

    let n_rows = x.nrows();
    if n_rows != y.nrows() {
        return Err(RegressionError::RowCountMismatch {
            x_rows: n_rows,
            y_rows: y.nrows(),
        });
    }

    let perm = row_permutation(n_rows, seed);
    let mut x_shuffled = x.clone();
    let mut y_shuffled = y.clone();
    x_shuffled.permute_rows(&perm)?;
    y_shuffled.permute_rows(&perm)?;

    let train_rows = (n_rows as f64 * train_size).floor() as usize;
    log::debug!(
        "Split {} rows into {} train and {} test rows (seed {})",
        n_rows,
        train_rows,
        n_rows - train_rows,
        seed
    );

    Ok(Some(TrainTestSplit {
        x_train: x_shuffled.extract(..train_rows, ..)?,
        x_test: x_shuffled.extract(train_rows.., ..)?,
        y_train: y_shuffled.extract(..train_rows, ..)?,
        y_test: y_shuffled.extract(train_rows.., ..)?,
    }))
}

/// Separate a data matrix into features and a single `n×1` target column.
///
/// Every column other than `target_col` becomes a feature, in order.
pub fn split_features_target(
    data: &Matrix,
    target_col: usize,
) -> Result<(Matrix, Matrix), RegressionError> {
    let y = data.extract(.., target_col..=target_col)?;
    let left = data.extract(.., ..target_col)?;
    let right = data.extract(.., target_col + 1..)?;

    let mut rows = Vec::with_capacity(data.nrows());
    for (l, r) in left.rows().zip(right.rows()) {
        let mut row = l.to_vec();
        row.extend_from_slice(r);
        rows.push(row);
    }
    let x = if rows.is_empty() {
        Matrix::zeros(0, data.ncols() - 1)
    } else {
        Matrix::from_rows(rows)?
    };

    Ok((x, y))
}
