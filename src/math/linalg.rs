use crate::math::error::MatrixError;
use crate::math::matrix::Matrix;

impl Matrix {
    /// `n×n` identity matrix.
    pub fn identity(n: usize) -> Matrix {
        let mut eye = Matrix::zeros(n, n);
        for i in 0..n {
            eye[(i, i)] = 1.0;
        }
        eye
    }

    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = self.shape();
        let src = self.as_slice();
        let mut data = Vec::with_capacity(rows * cols);
        for col in 0..cols {
            for row in 0..rows {
                data.push(src[row * cols + col]);
            }
        }
        Matrix::from_shape_vec((cols, rows), data)
            .unwrap_or_else(|_| unreachable!("transpose preserves element count"))
    }

    /// Inverse by Gauss-Jordan elimination with scaled partial pivoting.
    ///
    /// Each row is weighted by its largest absolute entry in the input, so
    /// rows of very different magnitude compete fairly for the pivot. A pivot
    /// is treated as zero when its magnitude falls below `n * f64::EPSILON`
    /// times the scale of its own row.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare(self.shape()));
        }
        let n = self.nrows();
        if self.as_slice().iter().any(|v| !v.is_finite()) {
            return Err(MatrixError::Singular);
        }

        let mut scales: Vec<f64> = self
            .rows()
            .map(|row| row.iter().fold(0.0_f64, |acc, &v| acc.max(v.abs())))
            .collect();
        if scales.iter().any(|&s| s == 0.0) {
            return Err(MatrixError::Singular);
        }
        let eps = n as f64 * f64::EPSILON;

        let mut a = self.clone();
        let mut inv = Matrix::identity(n);

        for col in 0..n {
            let mut pivot_row = col;
            let mut pivot_ratio = a[(col, col)].abs() / scales[col];
            for row in (col + 1)..n {
                let candidate = a[(row, col)].abs() / scales[row];
                if candidate > pivot_ratio {
                    pivot_ratio = candidate;
                    pivot_row = row;
                }
            }
            if a[(pivot_row, col)].abs() <= eps * scales[pivot_row] {
                return Err(MatrixError::Singular);
            }

            if pivot_row != col {
                swap_rows(&mut a, col, pivot_row);
                swap_rows(&mut inv, col, pivot_row);
                scales.swap(col, pivot_row);
            }

            let pivot = a[(col, col)];
            for j in 0..n {
                a[(col, j)] /= pivot;
                inv[(col, j)] /= pivot;
            }

            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = a[(row, col)];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..n {
                    let (pa, pi) = (a[(col, j)], inv[(col, j)]);
                    a[(row, j)] -= factor * pa;
                    inv[(row, j)] -= factor * pi;
                }
            }
        }

        Ok(inv)
    }
}

fn swap_rows(m: &mut Matrix, r1: usize, r2: usize) {
    let cols = m.ncols();
    let data = m.as_mut_slice();
    for j in 0..cols {
        data.swap(r1 * cols + j, r2 * cols + j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_shape_and_values() {
        let a = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t, Matrix::from([[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]));
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_inverse_needs_pivoting() {
        // zero in the leading position forces a row swap
        let a = Matrix::from([[0.0, 1.0], [2.0, 3.0]]);
        let inv = a.inverse().unwrap();
        let expected = Matrix::from([[-1.5, 0.5], [1.0, 0.0]]);
        assert!(inv.approx_eq(&expected, 1e-12), "got {}", inv);
    }

    #[test]
    fn test_inverse_times_matrix_is_identity() {
        let a = Matrix::from([[4.0, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]]);
        let product = a.inverse().unwrap().matmul(&a).unwrap();
        assert!(product.approx_eq(&Matrix::identity(3), 1e-10), "got {}", product);
    }

    #[test]
    fn test_inverse_badly_scaled_diagonal() {
        let a = Matrix::from([[1e10, 0.0], [0.0, 1e-7]]);
        let inv = a.inverse().unwrap();
        assert!((inv[(0, 0)] - 1e-10).abs() < 1e-22);
        assert!((inv[(1, 1)] - 1e7).abs() < 1e-5);
        assert_eq!(inv[(0, 1)], 0.0);
        assert_eq!(inv[(1, 0)], 0.0);
    }

    #[test]
    fn test_inverse_rows_of_mixed_magnitude() {
        let a = Matrix::from([[2e6, 1e6, 0.0], [3e-5, 1e-5, 2e-5], [1.0, 0.0, 4.0]]);
        let product = a.inverse().unwrap().matmul(&a).unwrap();
        assert!(product.approx_eq(&Matrix::identity(3), 1e-9), "got {}", product);
    }

    #[test]
    fn test_inverse_errors() {
        let singular = Matrix::from([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(singular.inverse().unwrap_err(), MatrixError::Singular);

        let rect = Matrix::ones(2, 3);
        assert_eq!(rect.inverse().unwrap_err(), MatrixError::NotSquare((2, 3)));

        assert_eq!(Matrix::zeros(2, 2).inverse().unwrap_err(), MatrixError::Singular);

        let zero_row = Matrix::from([[1.0, 2.0], [0.0, 0.0]]);
        assert_eq!(zero_row.inverse().unwrap_err(), MatrixError::Singular);

        let non_finite = Matrix::from([[f64::NAN, 1.0], [0.0, 1.0]]);
        assert_eq!(non_finite.inverse().unwrap_err(), MatrixError::Singular);
    }

    #[test]
    fn test_inverse_empty() {
        let empty = Matrix::zeros(0, 0);
        assert_eq!(empty.inverse().unwrap(), empty);
    }
}
