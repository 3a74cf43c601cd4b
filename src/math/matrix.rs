use std::fmt;
use std::ops::{Bound, Index, IndexMut, RangeBounds};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::math::error::MatrixError;

/// Dense row-major matrix of `f64` values.
///
/// A `Matrix` owns its buffer; cloning produces an independent copy and every
/// extraction materializes a new matrix rather than a view.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self, MatrixError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(MatrixError::BufferLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from a list of rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(MatrixError::RaggedRows {
                    row: idx,
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    pub fn from_elem(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, 0.0)
    }

    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, 1.0)
    }

    /// `n×1` matrix holding `values` top to bottom.
    pub fn column_vector(values: Vec<f64>) -> Self {
        let rows = values.len();
        Self {
            data: values,
            rows,
            cols: 1,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Checked element access.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                index: (row, col),
                shape: self.shape(),
            });
        }
        Ok(self.data[self.offset(row, col)])
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |row| self.row_slice(row))
    }

    /// Copy a single column out as an `n×1` matrix.
    pub fn column(&self, col: usize) -> Matrix {
        assert!(col < self.cols, "column index out of bounds");
        let values = (0..self.rows).map(|row| self[(row, col)]).collect();
        Matrix::column_vector(values)
    }

    pub fn select_rows(&self, indices: &[usize]) -> Matrix {
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &row in indices {
            data.extend_from_slice(self.row_slice(row));
        }
        Matrix {
            data,
            rows: indices.len(),
            cols: self.cols,
        }
    }

    /// Copy the sub-matrix covered by `rows` × `cols`.
    ///
    /// Ranges are half-open like slice ranges, so `m.extract(1..3, 0..2)`
    /// returns rows 1 and 2 of columns 0 and 1. Inverted ranges and ranges
    /// running past the edge are rejected.
    pub fn extract<R, C>(&self, rows: R, cols: C) -> Result<Matrix, MatrixError>
    where
        R: RangeBounds<usize>,
        C: RangeBounds<usize>,
    {
        let (row_start, row_end) = resolve_range(&rows, self.rows, "row")?;
        let (col_start, col_end) = resolve_range(&cols, self.cols, "column")?;

        let new_cols = col_end - col_start;
        let mut data = Vec::with_capacity((row_end - row_start) * new_cols);
        for row in row_start..row_end {
            data.extend_from_slice(&self.row_slice(row)[col_start..col_end]);
        }

        Ok(Matrix {
            data,
            rows: row_end - row_start,
            cols: new_cols,
        })
    }

    /// Return a copy with a constant column inserted before `position`.
    ///
    /// `position == ncols()` appends the column at the end.
    pub fn insert_col(&self, value: f64, position: usize) -> Result<Matrix, MatrixError> {
        if position > self.cols {
            return Err(MatrixError::InvalidPosition {
                position,
                ncols: self.cols,
            });
        }

        let new_cols = self.cols + 1;
        let mut data = Vec::with_capacity(self.rows * new_cols);
        for row in 0..self.rows {
            let slice = self.row_slice(row);
            data.extend_from_slice(&slice[..position]);
            data.push(value);
            data.extend_from_slice(&slice[position..]);
        }

        Ok(Matrix {
            data,
            rows: self.rows,
            cols: new_cols,
        })
    }

    /// Reorder rows in place so that new row `i` is old row `perm[i]`.
    pub fn permute_rows(&mut self, perm: &[usize]) -> Result<(), MatrixError> {
        let mut seen = vec![false; self.rows];
        if perm.len() != self.rows {
            return Err(MatrixError::InvalidPermutation { nrows: self.rows });
        }
        for &idx in perm {
            if idx >= self.rows || seen[idx] {
                return Err(MatrixError::InvalidPermutation { nrows: self.rows });
            }
            seen[idx] = true;
        }

        *self = self.select_rows(perm);
        Ok(())
    }

    /// Shuffle rows in place with the permutation derived from `seed`.
    ///
    /// Two matrices with the same row count shuffled with the same seed are
    /// reordered identically, which keeps paired features and targets aligned.
    pub fn shuffle_rows(&mut self, seed: u64) {
        let perm = row_permutation(self.rows, seed);
        *self = self.select_rows(&perm);
    }

    pub fn mapv<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Arithmetic mean of every entry; NaN for an empty matrix.
    pub fn mean(&self) -> f64 {
        self.sum() / self.data.len() as f64
    }

    /// Same shape and every pair of entries within `tol`.
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }
}

/// Deterministic permutation of `0..n` keyed by `seed`.
pub fn row_permutation(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(&mut rng);
    indices
}

fn resolve_range<R>(range: &R, len: usize, axis: &'static str) -> Result<(usize, usize), MatrixError>
where
    R: RangeBounds<usize>,
{
    let overflow = MatrixError::InvalidRange {
        axis,
        start: usize::MAX,
        end: usize::MAX,
        len,
    };

    let start = match range.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.checked_add(1).ok_or_else(|| overflow.clone())?,
    };

    let end = match range.end_bound() {
        Bound::Unbounded => len,
        Bound::Included(&e) => e.checked_add(1).ok_or(overflow)?,
        Bound::Excluded(&e) => e,
    };

    if start > end || end > len {
        return Err(MatrixError::InvalidRange {
            axis,
            start,
            end,
            len,
        });
    }
    Ok((start, end))
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Matrix {
    fn from(rows: [[f64; C]; R]) -> Self {
        Matrix {
            data: rows.iter().flat_map(|row| row.iter().copied()).collect(),
            rows: R,
            cols: C,
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            index.0,
            index.1,
            self.rows,
            self.cols
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            index.0,
            index.1,
            self.rows,
            self.cols
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (row_idx, row) in self.rows().enumerate() {
            if row_idx > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (idx, value) in row.iter().enumerate() {
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, value)?,
                    None => write!(f, "{}", value)?,
                }
                if idx + 1 != row.len() {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
