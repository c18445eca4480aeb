//! BLAS level 2 and 3 kernels and the matrix-vector / matrix-matrix multiply
//! family built on them.
//!
//! Every kernel validates shapes before writing, returning
//! [`CoreError::ShapeMismatch`](crate::CoreError::ShapeMismatch) on any
//! dimension fault.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::vector::{Vector, dot_slices};
use crate::{Scalar, validate};

// ======================================================================
// BLAS Level 2: matrix-vector operations, O(n^2)
// ======================================================================

/// General matrix-vector multiply: `y = alpha * A * x + beta * y`.
///
/// - `a` has shape `[m, n]`,
/// - `x` has length `n`,
/// - `y` has length exactly `m`.
///
/// If `beta` is zero, `y` is overwritten (not read).
///
/// ```
/// # use densela_core::{Matrix, Vector};
/// # use densela_core::linalg::gemv;
/// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let x = Vector::from_vec(vec![5.0, 6.0]).unwrap();
/// let mut y = Vector::<f64>::zeros(2).unwrap();
/// gemv(1.0, &a, &x, 0.0, &mut y).unwrap();
/// assert_eq!(y.as_slice(), &[17.0, 39.0]);
/// ```
pub fn gemv<T: Scalar>(
    alpha: T,
    a: &Matrix<T>,
    x: &Vector<T>,
    beta: T,
    y: &mut Vector<T>,
) -> Result<()> {
    let (m, n) = a.shape();
    validate::vector_len("gemv", n, x.len())?;
    validate::vector_len("gemv", m, y.len())?;

    let a_data = a.as_slice();
    let x_data = x.as_slice();
    let overwrite = beta == T::zero();

    for (i, yi) in y.as_mut_slice().iter_mut().enumerate() {
        let sum = dot_slices(&a_data[i * n..(i + 1) * n], x_data);
        *yi = if overwrite {
            alpha * sum
        } else {
            alpha * sum + beta * *yi
        };
    }

    Ok(())
}

// ======================================================================
// BLAS Level 3: matrix-matrix operations, O(n^3)
// ======================================================================

/// General matrix-matrix multiply: `C = alpha * A * B + beta * C`.
///
/// - `a` has shape `[m, k]`,
/// - `b` has shape `[k, n]`,
/// - `c` has shape `[m, n]`.
///
/// If `beta` is zero, `c` is overwritten (not read).
///
/// ```
/// # use densela_core::Matrix;
/// # use densela_core::linalg::gemm;
/// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
/// let mut c = Matrix::<f64>::zeros(2, 2).unwrap();
/// gemm(1.0, &a, &b, 0.0, &mut c).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn gemm<T: Scalar>(
    alpha: T,
    a: &Matrix<T>,
    b: &Matrix<T>,
    beta: T,
    c: &mut Matrix<T>,
) -> Result<()> {
    let (m, k) = a.shape();
    let n = b.cols();

    validate::inner_dims("multiply", k, b.rows())?;
    validate::same_shape("multiply", (m, n), c.shape())?;

    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let c_data = c.as_mut_slice();
    let overwrite = beta == T::zero();

    // ijk loop order (row-major friendly for A and C)
    for i in 0..m {
        let a_row = &a_data[i * k..(i + 1) * k];
        for j in 0..n {
            let mut sum = T::zero();
            for (p, &a_ip) in a_row.iter().enumerate() {
                sum += a_ip * b_data[p * n + j];
            }
            let c_idx = i * n + j;
            c_data[c_idx] = if overwrite {
                alpha * sum
            } else {
                alpha * sum + beta * c_data[c_idx]
            };
        }
    }

    Ok(())
}

// ======================================================================
// Multiply family on Matrix
// ======================================================================

impl<T: Scalar> Matrix<T> {
    /// Matrix-vector product `self * x` as a new vector of length `rows`.
    ///
    /// Requires `x.len() == self.cols()`.
    pub fn multiply_vector(&self, x: &Vector<T>) -> Result<Vector<T>> {
        validate::vector_len("multiply", self.cols(), x.len())?;
        let mut y = Vector::filled(self.rows(), T::zero())?;
        gemv(T::one(), self, x, T::zero(), &mut y)?;
        Ok(y)
    }

    /// Write `self * x` into `y`, whose length must be exactly `rows`.
    pub fn multiply_vector_into(&self, x: &Vector<T>, y: &mut Vector<T>) -> Result<()> {
        validate::vector_len("multiply", self.cols(), x.len())?;
        validate::vector_len("multiply", self.rows(), y.len())?;
        gemv(T::one(), self, x, T::zero(), y)
    }

    /// Overwrite `x` with `self * x`.
    ///
    /// The result vector is also the input, so `self` must be square with
    /// side `x.len()`. The whole product is buffered before `x` is touched.
    ///
    /// ```
    /// # use densela_core::{Matrix, Vector};
    /// let m = Matrix::<f64>::from_vec(2, 2, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
    /// let mut x = Vector::from_vec(vec![3.0, 4.0]).unwrap();
    /// m.multiply_vector_in_place(&mut x).unwrap();
    /// assert_eq!(x.as_slice(), &[4.0, 3.0]);
    /// ```
    pub fn multiply_vector_in_place(&self, x: &mut Vector<T>) -> Result<()> {
        validate::vector_len("multiply", self.cols(), x.len())?;
        validate::vector_len("multiply", self.rows(), x.len())?;
        let n = self.cols();
        let a_data = self.as_slice();
        let product: Vec<T> = (0..self.rows())
            .map(|i| dot_slices(&a_data[i * n..(i + 1) * n], x.as_slice()))
            .collect();
        x.as_mut_slice().copy_from_slice(&product);
        Ok(())
    }

    /// Matrix-matrix product `self * other`.
    ///
    /// `C[i,j] = sum_k A[i,k] * B[k,j]`; requires `self.cols() == other.rows()`.
    ///
    /// ```
    /// # use densela_core::Matrix;
    /// let a = Matrix::<f64>::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let b = Matrix::from_vec(3, 1, vec![1.0, 0.0, -1.0]).unwrap();
    /// let c = a.multiply(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[-2.0, -2.0]);
    /// ```
    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        validate::inner_dims("multiply", self.cols(), other.rows())?;
        let mut c = Matrix::filled(self.rows(), other.cols(), T::zero())?;
        gemm(T::one(), self, other, T::zero(), &mut c)?;
        Ok(c)
    }

    /// Write `self * other` into `result` of shape `rows(self) x cols(other)`.
    pub fn multiply_into(&self, other: &Matrix<T>, result: &mut Matrix<T>) -> Result<()> {
        gemm(T::one(), self, other, T::zero(), result)
    }

    /// Overwrite `self` with `self * other`.
    ///
    /// The product must keep the shape of `self`, so `other` must be square
    /// with side `self.cols()`. Each output row is buffered before the row
    /// it is computed from is overwritten.
    pub fn multiply_in_place(&mut self, other: &Matrix<T>) -> Result<()> {
        validate::inner_dims("multiply", self.cols(), other.rows())?;
        validate::same_shape("multiply", self.shape(), (self.rows(), other.cols()))?;

        let n = self.cols();
        let b_data = other.as_slice();
        let mut row_buf = vec![T::zero(); n];
        for row in self.as_mut_slice().chunks_exact_mut(n) {
            for (j, out) in row_buf.iter_mut().enumerate() {
                let mut sum = T::zero();
                for (p, &a_ip) in row.iter().enumerate() {
                    sum += a_ip * b_data[p * n + j];
                }
                *out = sum;
            }
            row.copy_from_slice(&row_buf);
        }
        Ok(())
    }

    /// Overwrite `other` with `self * other`, the case where the result
    /// buffer is the right operand.
    ///
    /// `self` must be square with side `other.rows()`. Each output column
    /// is buffered before the column it is computed from is overwritten.
    ///
    /// ```
    /// # use densela_core::Matrix;
    /// let swap = Matrix::<f64>::from_vec(2, 2, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
    /// let mut b = Matrix::from_vec(2, 1, vec![3.0, 4.0]).unwrap();
    /// swap.multiply_into_right(&mut b).unwrap();
    /// assert_eq!(b.as_slice(), &[4.0, 3.0]);
    /// ```
    pub fn multiply_into_right(&self, other: &mut Matrix<T>) -> Result<()> {
        validate::inner_dims("multiply", self.cols(), other.rows())?;
        validate::same_shape("multiply", other.shape(), (self.rows(), other.cols()))?;

        let (k, n) = other.shape();
        let a_data = self.as_slice();
        let b_data = other.as_mut_slice();
        let mut col_buf = vec![T::zero(); k];
        for j in 0..n {
            for (i, out) in col_buf.iter_mut().enumerate() {
                let a_row = &a_data[i * k..(i + 1) * k];
                let mut sum = T::zero();
                for (p, &a_ip) in a_row.iter().enumerate() {
                    sum += a_ip * b_data[p * n + j];
                }
                *out = sum;
            }
            for (i, &v) in col_buf.iter().enumerate() {
                b_data[i * n + j] = v;
            }
        }
        Ok(())
    }
}

// ======================================================================
// Infix wrappers
// ======================================================================

impl<T: Scalar> core::ops::Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.multiply(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Scalar> core::ops::Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        match self.multiply_vector(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}
