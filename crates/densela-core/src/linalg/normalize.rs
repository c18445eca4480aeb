//! Row and column p-norm normalization.
//!
//! Each row (or column) `v` is divided by `norm_p(v) = (sum |v_k|^p)^(1/p)`.
//! A row or column whose norm is exactly zero is copied through unscaled.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::vector::p_norm;
use crate::{Scalar, validate};

impl<T: Scalar> Matrix<T> {
    /// The p-norm of every column, in column order.
    pub fn column_norms(&self, p: T::Real) -> Result<Vec<T::Real>> {
        validate::norm_order(p)?;
        let cols = self.cols();
        Ok((0..cols)
            .map(|j| p_norm(self.as_slice().iter().skip(j).step_by(cols).copied(), p))
            .collect())
    }

    /// The p-norm of every row, in row order.
    pub fn row_norms(&self, p: T::Real) -> Result<Vec<T::Real>> {
        validate::norm_order(p)?;
        Ok(self
            .as_slice()
            .chunks_exact(self.cols())
            .map(|row| p_norm(row.iter().copied(), p))
            .collect())
    }

    /// A copy with every column divided by its own p-norm.
    ///
    /// Returns [`CoreError::InvalidParameter`](crate::CoreError::InvalidParameter)
    /// if `p < 1`. Zero columns are left unchanged.
    ///
    /// ```
    /// # use densela_core::Matrix;
    /// let m = Matrix::<f64>::from_vec(2, 2, vec![3.0, 1.0, 4.0, 1.0]).unwrap();
    /// let n = m.normalize_columns(2.0).unwrap();
    /// assert!((n.get(0, 0).unwrap() - 0.6).abs() < 1e-12);
    /// assert!((n.get(1, 0).unwrap() - 0.8).abs() < 1e-12);
    /// ```
    pub fn normalize_columns(&self, p: T::Real) -> Result<Matrix<T>> {
        let norms = self.column_norms(p)?;
        let mut out = self.clone();
        let cols = self.cols();
        for (j, &norm) in norms.iter().enumerate() {
            if norm == T::Real::zero() {
                log::debug!("normalize_columns: column {j} has zero norm, left unscaled");
                continue;
            }
            let divisor = T::from_real(norm);
            for x in out.as_mut_slice().iter_mut().skip(j).step_by(cols) {
                *x /= divisor;
            }
        }
        Ok(out)
    }

    /// A copy with every row divided by its own p-norm.
    ///
    /// Returns [`CoreError::InvalidParameter`](crate::CoreError::InvalidParameter)
    /// if `p < 1`. Zero rows are left unchanged.
    pub fn normalize_rows(&self, p: T::Real) -> Result<Matrix<T>> {
        let norms = self.row_norms(p)?;
        let mut out = self.clone();
        let cols = self.cols();
        for (i, (row, &norm)) in out
            .as_mut_slice()
            .chunks_exact_mut(cols)
            .zip(&norms)
            .enumerate()
        {
            if norm == T::Real::zero() {
                log::debug!("normalize_rows: row {i} has zero norm, left unscaled");
                continue;
            }
            let divisor = T::from_real(norm);
            for x in row {
                *x /= divisor;
            }
        }
        Ok(out)
    }
}
