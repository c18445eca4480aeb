//! Matrix factories: zero-filled, from data, from a generator, identity and
//! random.

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::random::ScalarSource;
use crate::validate;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Create a `rows x cols` matrix filled with zeros.
    ///
    /// Returns [`CoreError::InvalidParameter`] if either extent is zero.
    ///
    /// ```
    /// # use densela_core::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        validate::positive_dims(&[rows, cols])?;
        Self::filled(rows, cols, T::zero())
    }

    /// Create a `rows x cols` matrix filled with a constant value.
    pub fn full(rows: usize, cols: usize, value: T) -> Result<Self> {
        validate::positive_dims(&[rows, cols])?;
        Self::filled(rows, cols, value)
    }

    /// Create a matrix from row-major data.
    ///
    /// Returns an error if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        validate::positive_dims(&[rows, cols])?;
        if data.len() != validate::element_count::<T>(rows, cols)? {
            return Err(CoreError::InvalidShape {
                shape: vec![rows, cols],
                reason: "rows * cols does not match data length",
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix from a list of equally long rows.
    ///
    /// ```
    /// # use densela_core::Matrix;
    /// let m = Matrix::<f64>::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    /// assert_eq!(m.shape(), (3, 2));
    /// assert_eq!(m.get(2, 0).unwrap(), 5.0);
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        validate::positive_dims(&[n_rows, n_cols])?;

        let mut data = Vec::with_capacity(validate::element_count::<T>(n_rows, n_cols)?);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(CoreError::InvalidShape {
                    shape: vec![n_rows, row.len()],
                    reason: "rows must all have the same length",
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Create a matrix whose element `(i, j)` is `generator(i, j)`.
    ///
    /// The generator is called once per element in row-major order.
    ///
    /// ```
    /// # use densela_core::Matrix;
    /// let m = Matrix::<f64>::from_fn(2, 2, |i, j| (10 * i + j) as f64).unwrap();
    /// assert_eq!(m.as_slice(), &[0.0, 1.0, 10.0, 11.0]);
    /// ```
    pub fn from_fn<F>(rows: usize, cols: usize, mut generator: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        validate::positive_dims(&[rows, cols])?;
        let mut data = Vec::with_capacity(validate::element_count::<T>(rows, cols)?);
        for i in 0..rows {
            for j in 0..cols {
                data.push(generator(i, j));
            }
        }
        Ok(Self { data, rows, cols })
    }

    /// Create an `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }

    /// Create a matrix whose elements are drawn from `source`.
    ///
    /// Real scalars take one draw per element, complex scalars two. The
    /// engine does not care which distribution stands behind the source.
    ///
    /// Returns [`CoreError::InvalidParameter`] if either extent is zero.
    ///
    /// ```
    /// # use densela_core::Matrix;
    /// # use densela_core::random::Rng;
    /// let mut rng = Rng::new(7);
    /// let m = Matrix::<f64>::random(3, 2, &mut rng).unwrap();
    /// assert!(m.iter().all(|&x| (0.0..1.0).contains(&x)));
    /// ```
    pub fn random<S>(rows: usize, cols: usize, source: &mut S) -> Result<Self>
    where
        S: ScalarSource + ?Sized,
    {
        validate::positive_dims(&[rows, cols])?;
        let len = validate::element_count::<T>(rows, cols)?;
        log::trace!("drawing {rows}x{cols} random matrix");
        let data = (0..len)
            .map(|_| T::from_uniform(|| source.next_scalar()))
            .collect();
        Ok(Self { data, rows, cols })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::random::Rng;
    use num_complex::Complex64;

    #[test]
    fn test_zeros() {
        let m = Matrix::<f64>::zeros(3, 4).unwrap();
        assert_eq!(m.shape(), (3, 4));
        assert_eq!(m.numel(), 12);
        assert!(m.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_zero_extent_rejected() {
        assert!(matches!(
            Matrix::<f64>::zeros(0, 3),
            Err(CoreError::InvalidParameter { .. })
        ));
        assert!(Matrix::<f64>::from_fn(2, 0, |_, _| 1.0).is_err());
        assert!(Matrix::<f64>::full(0, 0, 1.0).is_err());
    }

    #[test]
    fn test_overflowing_extents_rejected() {
        let huge = usize::MAX / 2;
        assert!(matches!(
            Matrix::<f64>::zeros(huge, 3),
            Err(CoreError::InvalidShape { .. })
        ));
        assert!(Matrix::<f64>::full(3, huge, 1.0).is_err());
        assert!(Matrix::<f64>::from_fn(huge, huge, |_, _| 0.0).is_err());
        assert!(Matrix::<f64>::random(huge, 4, &mut Rng::new(1)).is_err());
        // `huge * 2` wraps to a small count; it must not match the data.
        assert!(matches!(
            Matrix::from_vec(huge + 1, 2, vec![0.0_f64; 0]),
            Err(CoreError::InvalidShape { .. })
        ));
        assert!(Matrix::<f64>::identity(huge).is_err());
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let r = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0]);
        assert!(matches!(r, Err(CoreError::InvalidShape { .. })));
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            Matrix::<f64>::from_rows(&rows),
            Err(CoreError::InvalidShape { .. })
        ));
        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(Matrix::<f64>::from_rows(&empty).is_err());
    }

    #[test]
    fn test_from_fn_row_major_order() {
        let mut calls = Vec::new();
        let m = Matrix::<f64>::from_fn(2, 3, |i, j| {
            calls.push((i, j));
            (i * 3 + j) as f64
        })
        .unwrap();
        assert_eq!(calls, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(m.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_identity() {
        let eye = Matrix::<Complex64>::identity(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j {
                    Complex64::new(1.0, 0.0)
                } else {
                    Complex64::new(0.0, 0.0)
                };
                assert_eq!(eye.get(i, j).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_random_reproducible() {
        let a = Matrix::<f64>::random(4, 5, &mut Rng::new(11)).unwrap();
        let b = Matrix::<f64>::random(4, 5, &mut Rng::new(11)).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_random_invalid_dims() {
        let mut rng = Rng::new(0);
        assert!(matches!(
            Matrix::<f64>::random(0, 2, &mut rng),
            Err(CoreError::InvalidParameter { .. })
        ));
        assert!(Matrix::<f64>::random(2, 0, &mut rng).is_err());
    }

    #[test]
    fn test_random_complex_uses_two_draws() {
        struct Counter(f64);
        impl ScalarSource for Counter {
            fn next_scalar(&mut self) -> f64 {
                self.0 += 0.125;
                self.0
            }
        }
        let m = Matrix::<Complex64>::random(1, 2, &mut Counter(0.0)).unwrap();
        assert_eq!(m.get(0, 0).unwrap(), Complex64::new(0.125, 0.25));
        assert_eq!(m.get(0, 1).unwrap(), Complex64::new(0.375, 0.5));
    }
}
