//! Dense matrix type with row-major storage.
//!
//! A [`Matrix`] has a fixed, non-zero number of rows and columns. Its shape
//! never changes after construction: every operation that yields a
//! different shape allocates a new matrix, and every into-result operation
//! overwrites elements of a buffer whose shape already matches.

mod create;
mod display;
mod ops;

use crate::error::{CoreError, Result};
use crate::vector::Vector;
use crate::{Scalar, validate};

/// A dense `rows x cols` matrix.
///
/// Elements are stored contiguously in row-major order. The matrix owns its
/// storage and cloning performs a deep copy.
#[derive(Debug, Clone)]
pub struct Matrix<T: Scalar> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements, always `rows * cols`.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// A flat slice of all elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// A mutable flat slice of all elements in row-major order.
    ///
    /// The slice length is fixed, so the shape cannot be changed through it.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    #[inline]
    fn flat_index(&self, i: usize, j: usize) -> Result<usize> {
        if i >= self.rows || j >= self.cols {
            return Err(CoreError::IndexOutOfBounds {
                index: vec![i, j],
                shape: vec![self.rows, self.cols],
            });
        }
        Ok(i * self.cols + j)
    }

    /// The element at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        let flat = self.flat_index(i, j)?;
        Ok(self.data[flat])
    }

    /// A mutable reference to the element at row `i`, column `j`.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        let flat = self.flat_index(i, j)?;
        Ok(&mut self.data[flat])
    }

    /// Overwrite the element at row `i`, column `j`.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        let flat = self.flat_index(i, j)?;
        self.data[flat] = value;
        Ok(())
    }

    /// Row `i` as a slice.
    pub fn row_slice(&self, i: usize) -> Result<&[T]> {
        if i >= self.rows {
            return Err(CoreError::IndexOutOfBounds {
                index: vec![i],
                shape: vec![self.rows, self.cols],
            });
        }
        Ok(&self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// Copy of row `i`.
    pub fn row(&self, i: usize) -> Result<Vector<T>> {
        Vector::from_vec(self.row_slice(i)?.to_vec())
    }

    /// Copy of column `j`.
    pub fn column(&self, j: usize) -> Result<Vector<T>> {
        if j >= self.cols {
            return Err(CoreError::IndexOutOfBounds {
                index: vec![j],
                shape: vec![self.rows, self.cols],
            });
        }
        Vector::from_vec(self.data.iter().skip(j).step_by(self.cols).copied().collect())
    }

    // ------------------------------------------------------------------
    // Iterators
    // ------------------------------------------------------------------

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    // ------------------------------------------------------------------
    // Map / structure
    // ------------------------------------------------------------------

    /// Apply a function to every element, returning a new matrix.
    pub fn map<F>(&self, f: F) -> Matrix<T>
    where
        F: Fn(T) -> T,
    {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Apply a function to every element in place.
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(T) -> T,
    {
        for x in &mut self.data {
            *x = f(*x);
        }
    }

    /// The `cols x rows` transpose.
    pub fn transpose(&self) -> Matrix<T> {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Element-wise complex conjugate.
    pub fn conjugate(&self) -> Matrix<T> {
        self.map(T::conj)
    }

    /// Conjugate transpose (adjoint).
    pub fn conjugate_transpose(&self) -> Matrix<T> {
        let mut t = self.transpose();
        t.apply(T::conj);
        t
    }

    /// Allocate a matrix with positive extents, checking that `rows * cols`
    /// is representable.
    pub(crate) fn filled(rows: usize, cols: usize, value: T) -> Result<Self> {
        let len = validate::element_count::<T>(rows, cols)?;
        Ok(Self {
            data: vec![value; len],
            rows,
            cols,
        })
    }
}

impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}
