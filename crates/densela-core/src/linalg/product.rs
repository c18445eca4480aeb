//! Transpose-fused products and the Kronecker product.
//!
//! `A * B^T` and `A^T * B` are computed by walking the operands with the
//! transposed index pattern; no transposed copy is ever materialized.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::vector::dot_slices;
use crate::{Scalar, validate};

impl<T: Scalar> Matrix<T> {
    // ======================================================================
    // A * B^T
    // ======================================================================

    /// `self * other^T`, shape `rows(self) x rows(other)`.
    ///
    /// `C[i,j] = sum_k A[i,k] * B[j,k]`, the dot product of row `i` of
    /// `self` with row `j` of `other`. Requires `cols(self) == cols(other)`.
    ///
    /// ```
    /// # use densela_core::Matrix;
    /// let a = Matrix::<f64>::from_vec(1, 2, vec![1.0, 2.0]).unwrap();
    /// let b = Matrix::from_vec(2, 2, vec![3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let c = a.transpose_and_multiply(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[11.0, 17.0]);
    /// ```
    pub fn transpose_and_multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        validate::inner_dims("transpose_and_multiply", self.cols(), other.cols())?;
        let mut c = Matrix::filled(self.rows(), other.rows(), T::zero())?;
        self.transpose_and_multiply_kernel(other, c.as_mut_slice());
        Ok(c)
    }

    /// Write `self * other^T` into `result`.
    pub fn transpose_and_multiply_into(
        &self,
        other: &Matrix<T>,
        result: &mut Matrix<T>,
    ) -> Result<()> {
        validate::inner_dims("transpose_and_multiply", self.cols(), other.cols())?;
        validate::same_shape(
            "transpose_and_multiply",
            (self.rows(), other.rows()),
            result.shape(),
        )?;
        self.transpose_and_multiply_kernel(other, result.as_mut_slice());
        Ok(())
    }

    /// Overwrite `self` with `self * other^T`.
    ///
    /// The product keeps the shape of `self` only when `other` is square with
    /// side `cols(self)`. Output row `i` reads only row `i` of `self`, so one
    /// row is buffered at a time.
    pub fn transpose_and_multiply_in_place(&mut self, other: &Matrix<T>) -> Result<()> {
        validate::inner_dims("transpose_and_multiply", self.cols(), other.cols())?;
        validate::same_shape(
            "transpose_and_multiply",
            self.shape(),
            (self.rows(), other.rows()),
        )?;

        let k = self.cols();
        let b = other.as_slice();
        let mut row_buf = vec![T::zero(); k];
        for row in self.as_mut_slice().chunks_exact_mut(k) {
            for (j, out) in row_buf.iter_mut().enumerate() {
                *out = dot_slices(row, &b[j * k..(j + 1) * k]);
            }
            row.copy_from_slice(&row_buf);
        }
        Ok(())
    }

    fn transpose_and_multiply_kernel(&self, other: &Matrix<T>, out: &mut [T]) {
        let k = self.cols();
        let n = other.rows();
        let a = self.as_slice();
        let b = other.as_slice();
        for (i, out_row) in out.chunks_exact_mut(n).enumerate() {
            let a_row = &a[i * k..(i + 1) * k];
            for (j, o) in out_row.iter_mut().enumerate() {
                *o = dot_slices(a_row, &b[j * k..(j + 1) * k]);
            }
        }
    }

    // ======================================================================
    // A^T * B
    // ======================================================================

    /// `self^T * other`, shape `cols(self) x cols(other)`.
    ///
    /// `C[i,j] = sum_k A[k,i] * B[k,j]`, the dot product of column `i` of
    /// `self` with column `j` of `other`. Requires `rows(self) == rows(other)`.
    pub fn transpose_this_and_multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        validate::inner_dims("transpose_this_and_multiply", self.rows(), other.rows())?;
        let mut c = Matrix::filled(self.cols(), other.cols(), T::zero())?;
        self.transpose_this_and_multiply_kernel(other, c.as_mut_slice());
        Ok(c)
    }

    /// Write `self^T * other` into `result`.
    pub fn transpose_this_and_multiply_into(
        &self,
        other: &Matrix<T>,
        result: &mut Matrix<T>,
    ) -> Result<()> {
        validate::inner_dims("transpose_this_and_multiply", self.rows(), other.rows())?;
        validate::same_shape(
            "transpose_this_and_multiply",
            (self.cols(), other.cols()),
            result.shape(),
        )?;
        self.transpose_this_and_multiply_kernel(other, result.as_mut_slice());
        Ok(())
    }

    /// Overwrite `self` with `self^T * other`.
    ///
    /// Both operands must be square with the same side. Every output row
    /// reads a whole column of `self`, so the full product is buffered
    /// before `self` is touched.
    pub fn transpose_this_and_multiply_in_place(&mut self, other: &Matrix<T>) -> Result<()> {
        validate::inner_dims("transpose_this_and_multiply", self.rows(), other.rows())?;
        validate::same_shape(
            "transpose_this_and_multiply",
            self.shape(),
            (self.cols(), other.cols()),
        )?;

        let mut product = vec![T::zero(); self.numel()];
        self.transpose_this_and_multiply_kernel(other, &mut product);
        self.as_mut_slice().copy_from_slice(&product);
        Ok(())
    }

    fn transpose_this_and_multiply_kernel(&self, other: &Matrix<T>, out: &mut [T]) {
        let (k, m) = self.shape();
        let n = other.cols();
        let a = self.as_slice();
        let b = other.as_slice();
        for (i, out_row) in out.chunks_exact_mut(n).enumerate() {
            for (j, o) in out_row.iter_mut().enumerate() {
                let mut sum = T::zero();
                for p in 0..k {
                    sum += a[p * m + i] * b[p * n + j];
                }
                *o = sum;
            }
        }
    }

    // ======================================================================
    // Kronecker product
    // ======================================================================

    /// Kronecker product `self ⊗ other`.
    ///
    /// For `self` of shape `m x n` and `other` of shape `p x q` the result
    /// is `(m*p) x (n*q)` with
    /// `C[i*p + ii, j*q + jj] = A[i,j] * B[ii,jj]`.
    ///
    /// ```
    /// # use densela_core::Matrix;
    /// let a = Matrix::<f64>::from_vec(1, 2, vec![1.0, 10.0]).unwrap();
    /// let b = Matrix::from_vec(2, 1, vec![2.0, 3.0]).unwrap();
    /// let k = a.kronecker_product(&b).unwrap();
    /// assert_eq!(k.shape(), (2, 2));
    /// assert_eq!(k.as_slice(), &[2.0, 20.0, 3.0, 30.0]);
    /// ```
    ///
    /// Returns [`CoreError::InvalidShape`](crate::CoreError::InvalidShape)
    /// if the result extents cannot be represented.
    pub fn kronecker_product(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        let (rows, cols) = validate::kronecker_shape::<T>(self.shape(), other.shape())?;
        let mut c = Matrix::filled(rows, cols, T::zero())?;
        self.kronecker_kernel(other, c.as_mut_slice());
        Ok(c)
    }

    /// Write `self ⊗ other` into `result`, which must already have shape
    /// exactly `rows(self)*rows(other) x cols(self)*cols(other)`.
    pub fn kronecker_product_into(&self, other: &Matrix<T>, result: &mut Matrix<T>) -> Result<()> {
        let expected = validate::kronecker_shape::<T>(self.shape(), other.shape())?;
        validate::same_shape("kronecker_product", expected, result.shape())?;
        self.kronecker_kernel(other, result.as_mut_slice());
        Ok(())
    }

    fn kronecker_kernel(&self, other: &Matrix<T>, out: &mut [T]) {
        let (m, n) = self.shape();
        let (p, q) = other.shape();
        let out_cols = n * q;
        let a = self.as_slice();
        let b = other.as_slice();
        for i in 0..m {
            for j in 0..n {
                let a_ij = a[i * n + j];
                for ii in 0..p {
                    let row_start = (i * p + ii) * out_cols + j * q;
                    let b_row = &b[ii * q..(ii + 1) * q];
                    for (o, &b_val) in out[row_start..row_start + q].iter_mut().zip(b_row) {
                        *o = a_ij * b_val;
                    }
                }
            }
        }
    }
}
