//! Arithmetic on [`Matrix`].
//!
//! The checked methods (`checked_add`, `checked_sub`, `matmul`) report shape
//! problems as [`MatrixError`]. The `std::ops` operators call the same code
//! and panic with the error text, mirroring slice indexing.
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::math::error::MatrixError;
use crate::math::matrix::Matrix;

impl Matrix {
    fn zip_with<F>(&self, rhs: &Matrix, op: &'static str, f: F) -> Result<Matrix, MatrixError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::ShapeMismatch {
                op,
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let data = self
            .as_slice()
            .iter()
            .zip(rhs.as_slice().iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix::from_shape_vec(self.shape(), data)
    }

    pub fn checked_add(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, "add", |a, b| a + b)
    }

    pub fn checked_sub(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, "subtract", |a, b| a - b)
    }

    /// Hadamard (entrywise) product.
    pub fn hadamard(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, "hadamard", |a, b| a * b)
    }

    /// Matrix product `self · rhs`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        let (n, k) = self.shape();
        let (k2, m) = rhs.shape();
        if k != k2 {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        let lhs = self.as_slice();
        let rhs_data = rhs.as_slice();
        let mut out = vec![0.0; n * m];
        // i-p-j order walks both row-major buffers contiguously
        for i in 0..n {
            let out_row = &mut out[i * m..(i + 1) * m];
            for p in 0..k {
                let a = lhs[i * k + p];
                if a == 0.0 {
                    continue;
                }
                let rhs_row = &rhs_data[p * m..(p + 1) * m];
                for (o, &b) in out_row.iter_mut().zip(rhs_row.iter()) {
                    *o += a * b;
                }
            }
        }
        Matrix::from_shape_vec((n, m), out)
    }

    /// Raise every entry to `exponent`.
    pub fn powf(&self, exponent: f64) -> Matrix {
        self.mapv(|v| v.powf(exponent))
    }

    pub fn powi(&self, exponent: i32) -> Matrix {
        self.mapv(|v| v.powi(exponent))
    }
}

fn or_panic(result: Result<Matrix, MatrixError>) -> Matrix {
    match result {
        Ok(m) => m,
        Err(e) => panic!("{}", e),
    }
}

macro_rules! matrix_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<'a, 'b> $trait<&'b Matrix> for &'a Matrix {
            type Output = Matrix;

            fn $method(self, rhs: &'b Matrix) -> Matrix {
                or_panic(self.$checked(rhs))
            }
        }

        impl $trait<Matrix> for Matrix {
            type Output = Matrix;

            fn $method(self, rhs: Matrix) -> Matrix {
                or_panic(self.$checked(&rhs))
            }
        }

        impl<'b> $trait<&'b Matrix> for Matrix {
            type Output = Matrix;

            fn $method(self, rhs: &'b Matrix) -> Matrix {
                or_panic(self.$checked(rhs))
            }
        }

        impl<'a> $trait<Matrix> for &'a Matrix {
            type Output = Matrix;

            fn $method(self, rhs: Matrix) -> Matrix {
                or_panic(self.$checked(&rhs))
            }
        }
    };
}

matrix_binop!(Add, add, checked_add);
matrix_binop!(Sub, sub, checked_sub);
matrix_binop!(Mul, mul, matmul);

macro_rules! scalar_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<'a> $trait<f64> for &'a Matrix {
            type Output = Matrix;

            fn $method(self, rhs: f64) -> Matrix {
                self.mapv(|v| v $op rhs)
            }
        }

        impl $trait<f64> for Matrix {
            type Output = Matrix;

            fn $method(self, rhs: f64) -> Matrix {
                (&self).$method(rhs)
            }
        }
    };
}

scalar_binop!(Add, add, +);
scalar_binop!(Sub, sub, -);
scalar_binop!(Mul, mul, *);
scalar_binop!(Div, div, /);

// scalar on the left; only the commutative ops make sense here
macro_rules! scalar_lhs_binop {
    ($trait:ident, $method:ident) => {
        impl<'a> $trait<&'a Matrix> for f64 {
            type Output = Matrix;

            fn $method(self, rhs: &'a Matrix) -> Matrix {
                rhs.$method(self)
            }
        }

        impl $trait<Matrix> for f64 {
            type Output = Matrix;

            fn $method(self, rhs: Matrix) -> Matrix {
                rhs.$method(self)
            }
        }
    };
}

scalar_lhs_binop!(Add, add);
scalar_lhs_binop!(Mul, mul);

impl<'a> Neg for &'a Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.mapv(|v| -v)
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add_sub() {
        let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from([[0.5, 0.5], [1.0, -1.0]]);
        assert_eq!(a.checked_add(&b).unwrap(), Matrix::from([[1.5, 2.5], [4.0, 3.0]]));
        assert_eq!(a.checked_sub(&b).unwrap(), Matrix::from([[0.5, 1.5], [2.0, 5.0]]));

        let c = Matrix::ones(2, 3);
        assert!(matches!(
            a.checked_add(&c),
            Err(MatrixError::ShapeMismatch { op: "add", .. })
        ));
        assert!(a.checked_sub(&c).is_err());
    }

    #[test]
    fn test_matmul_shapes() {
        let a = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::from([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        let c = a.matmul(&b).unwrap();
        assert_eq!(c, Matrix::from([[58.0, 64.0], [139.0, 154.0]]));

        let err = a.matmul(&a).unwrap_err();
        assert_eq!(
            err,
            MatrixError::DimensionMismatch {
                left: (2, 3),
                right: (2, 3)
            }
        );
    }

    #[test]
    fn test_operators_match_checked() {
        let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from([[2.0, 0.0], [1.0, 2.0]]);
        assert_eq!(&a + &b, a.checked_add(&b).unwrap());
        assert_eq!(&a - &b, a.checked_sub(&b).unwrap());
        assert_eq!(&a * &b, a.matmul(&b).unwrap());
        assert_eq!(a.clone() * b.clone(), Matrix::from([[4.0, 4.0], [10.0, 8.0]]));
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn test_mul_operator_panics_on_mismatch() {
        let a = Matrix::ones(2, 3);
        let _ = &a * &a;
    }

    #[test]
    fn test_scalar_ops_both_orders() {
        let a = Matrix::from([[1.0, -2.0]]);
        assert_eq!(&a + 1.0, Matrix::from([[2.0, -1.0]]));
        assert_eq!(1.0 + &a, Matrix::from([[2.0, -1.0]]));
        assert_eq!(&a * 3.0, Matrix::from([[3.0, -6.0]]));
        assert_eq!(3.0 * &a, Matrix::from([[3.0, -6.0]]));
        assert_eq!(&a - 1.0, Matrix::from([[0.0, -3.0]]));
        assert_eq!(&a / 2.0, Matrix::from([[0.5, -1.0]]));
        assert_eq!(-a, Matrix::from([[-1.0, 2.0]]));
    }

    #[test]
    fn test_powers() {
        let a = Matrix::from([[2.0, -3.0], [0.5, 4.0]]);
        assert_eq!(a.powi(2), Matrix::from([[4.0, 9.0], [0.25, 16.0]]));
        assert_eq!(a.powf(2.0), a.powi(2));
        assert!(a.hadamard(&a).unwrap().approx_eq(&a.powf(2.0), 1e-12));
    }
}
