use std::error::Error;
use std::fmt;

/// Errors raised by shape, bounds and numerical checks on [`Matrix`](super::Matrix).
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Elementwise operation between matrices of different shapes.
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Matrix product where `left.1 != right.0`.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    IndexOutOfBounds {
        index: (usize, usize),
        shape: (usize, usize),
    },
    /// Extraction range that is inverted or runs past the axis length.
    InvalidRange {
        axis: &'static str,
        start: usize,
        end: usize,
        len: usize,
    },
    InvalidPosition {
        position: usize,
        ncols: usize,
    },
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    BufferLength {
        rows: usize,
        cols: usize,
        len: usize,
    },
    NotSquare((usize, usize)),
    Singular,
    InvalidPermutation {
        nrows: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::ShapeMismatch { op, left, right } => write!(
                f,
                "shape mismatch in {}: {}x{} vs {}x{}",
                op, left.0, left.1, right.0, right.1
            ),
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: cannot multiply {}x{} by {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::IndexOutOfBounds { index, shape } => write!(
                f,
                "index ({}, {}) out of range for {}x{} matrix",
                index.0, index.1, shape.0, shape.1
            ),
            MatrixError::InvalidRange {
                axis,
                start,
                end,
                len,
            } => write!(
                f,
                "invalid {} range {}..{} for axis of length {}",
                axis, start, end, len
            ),
            MatrixError::InvalidPosition { position, ncols } => write!(
                f,
                "column position {} out of range for matrix with {} columns",
                position, ncols
            ),
            MatrixError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} columns, expected {}",
                row, found, expected
            ),
            MatrixError::BufferLength { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            MatrixError::NotSquare((rows, cols)) => {
                write!(f, "matrix is not square: {}x{}", rows, cols)
            }
            MatrixError::Singular => write!(f, "singular matrix"),
            MatrixError::InvalidPermutation { nrows } => write!(
                f,
                "permutation is not a reordering of 0..{}",
                nrows
            ),
        }
    }
}

impl Error for MatrixError {}
