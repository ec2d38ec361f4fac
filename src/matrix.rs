use std::fmt;

use crate::element::Element;
use crate::error::{MatrixError, Result};
use crate::kernel::MatmulKernel;
use crate::transpose::transpose_blocked;

/// A dense matrix with a flat row-major buffer.
///
/// Element (i, j) lives at `data[i * cols + j]`; the buffer length always
/// equals `rows * cols`. A matrix with zero rows or columns is the empty
/// sentinel: operations that need real operands (transpose, matmul) reject
/// it with `EmptyMatrix`.
///
/// Each matrix exclusively owns its buffer. Producing operations allocate a
/// fresh result and never alias the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T: Element> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Create a zero-filled matrix. Zero `rows` or `cols` yields the empty
    /// sentinel.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Wrap a caller-supplied row-major buffer.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Size along dimension `dim`: rows for 0, columns for 1.
    ///
    /// # Errors
    /// Returns `BadDimension` for any other index.
    pub fn shape(&self, dim: usize) -> Result<usize> {
        match dim {
            0 => Ok(self.rows),
            1 => Ok(self.cols),
            _ => Err(MatrixError::BadDimension { dim }),
        }
    }

    /// Returns true iff the matrix has zero rows or columns.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Checked element read.
    ///
    /// # Errors
    /// Returns `OutOfBounds` if `i >= rows` or `j >= cols`.
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        self.check_index(i, j)?;
        Ok(self.data[i * self.cols + j])
    }

    /// Checked element write.
    ///
    /// # Errors
    /// Returns `OutOfBounds` if `i >= rows` or `j >= cols`.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        self.check_index(i, j)?;
        self.data[i * self.cols + j] = value;
        Ok(())
    }

    fn check_index(&self, i: usize, j: usize) -> Result<()> {
        if i >= self.rows || j >= self.cols {
            return Err(MatrixError::OutOfBounds {
                i,
                j,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The underlying row-major buffer, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Transpose into a fresh `cols × rows` matrix.
    ///
    /// Transpose is an involution: transposing twice yields a matrix equal
    /// to the original.
    ///
    /// # Errors
    /// Returns `EmptyMatrix` on the empty sentinel.
    pub fn transpose(&self) -> Result<Matrix<T>> {
        if self.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        let mut data = vec![T::zero(); self.rows * self.cols];
        transpose_blocked(&self.data, &mut data, self.rows, self.cols);
        Ok(Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        })
    }

    /// Matrix multiplication `self @ other` using the given kernel.
    ///
    /// self is [m, k], other is [k, n], result is [m, n].
    ///
    /// # Errors
    /// Returns `EmptyMatrix` if either operand is the empty sentinel, and
    /// `SizeMismatch` if `self.cols() != other.rows()`.
    pub fn matmul(&self, other: &Matrix<T>, kernel: &dyn MatmulKernel<T>) -> Result<Matrix<T>> {
        if self.is_empty() || other.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        if self.cols != other.rows {
            return Err(MatrixError::SizeMismatch {
                m: self.rows,
                k: self.cols,
                k2: other.rows,
                n: other.cols,
            });
        }
        let data = kernel.matmul(&self.data, &other.data, self.rows, self.cols, other.cols)?;
        Matrix::from_vec(self.rows, other.cols, data)
    }
}

/// Tab-separated elements, one line per row. Diagnostic output, not a wire
/// format.
impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{}\t", self.data[i * self.cols + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
