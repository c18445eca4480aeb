//! Element-wise arithmetic for [`Matrix`]: scalar multiply, add, subtract,
//! negate, pointwise multiply / divide, and trace.
//!
//! Each operation comes in three forms:
//! - allocating (`add`) returns a new matrix,
//! - into-result (`add_into`) overwrites a caller-supplied buffer,
//! - in-place (`add_in_place`) overwrites `self`, the aliased case.
//!
//! Subtraction and division are not commutative, so they also have an
//! `_into_right` form for the case where the result buffer is the right
//! operand.
//!
//! Shapes are validated before anything is written.
//!
//! The infix operators at the bottom are thin wrappers that panic on shape
//! mismatch; the named methods are the fallible API.

use core::ops::{Add, Mul, Neg, Sub};

use crate::Scalar;
use crate::error::Result;
use crate::validate;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    fn zip_write<F>(&self, other: &Matrix<T>, out: &mut [T], f: F)
    where
        F: Fn(T, T) -> T,
    {
        for ((o, &a), &b) in out.iter_mut().zip(&self.data).zip(&other.data) {
            *o = f(a, b);
        }
    }

    fn zip_assign<F>(&mut self, other: &Matrix<T>, f: F)
    where
        F: Fn(T, T) -> T,
    {
        for (a, &b) in self.data.iter_mut().zip(&other.data) {
            *a = f(*a, b);
        }
    }

    fn zip_assign_right<F>(&self, other: &mut Matrix<T>, f: F)
    where
        F: Fn(T, T) -> T,
    {
        for (b, &a) in other.data.iter_mut().zip(&self.data) {
            *b = f(a, *b);
        }
    }

    // ======================================================================
    // Scalar multiply
    // ======================================================================

    /// `self * s` for every element.
    ///
    /// ```
    /// # use densela_core::Matrix;
    /// let m = Matrix::<f64>::from_vec(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(m.scalar_multiply(10.0).as_slice(), &[10.0, 20.0, 30.0]);
    /// ```
    pub fn scalar_multiply(&self, s: T) -> Matrix<T> {
        self.map(|x| x * s)
    }

    /// Write `self * s` into `result`, which must have the shape of `self`.
    pub fn scalar_multiply_into(&self, s: T, result: &mut Matrix<T>) -> Result<()> {
        validate::same_shape("scalar_multiply", self.shape(), result.shape())?;
        for (o, &a) in result.data.iter_mut().zip(&self.data) {
            *o = a * s;
        }
        Ok(())
    }

    /// Scale `self` by `s`.
    pub fn scalar_multiply_in_place(&mut self, s: T) {
        self.apply(|x| x * s);
    }

    // ======================================================================
    // Add / subtract
    // ======================================================================

    /// Element-wise sum.
    ///
    /// Returns [`CoreError::RangeMismatch`](crate::CoreError::RangeMismatch)
    /// if the row or column counts differ.
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        validate::same_range("add", self.shape(), other.shape())?;
        let mut out = Matrix::filled(self.rows, self.cols, T::zero())?;
        self.zip_write(other, &mut out.data, |a, b| a + b);
        Ok(out)
    }

    /// Write `self + other` into `result`.
    pub fn add_into(&self, other: &Matrix<T>, result: &mut Matrix<T>) -> Result<()> {
        validate::same_range("add", self.shape(), other.shape())?;
        validate::same_range("add", self.shape(), result.shape())?;
        self.zip_write(other, &mut result.data, |a, b| a + b);
        Ok(())
    }

    /// `self += other`.
    pub fn add_in_place(&mut self, other: &Matrix<T>) -> Result<()> {
        validate::same_range("add", self.shape(), other.shape())?;
        self.zip_assign(other, |a, b| a + b);
        Ok(())
    }

    /// Element-wise difference `self - other`.
    ///
    /// Returns [`CoreError::RangeMismatch`](crate::CoreError::RangeMismatch)
    /// if the row or column counts differ.
    pub fn subtract(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        validate::same_range("subtract", self.shape(), other.shape())?;
        let mut out = Matrix::filled(self.rows, self.cols, T::zero())?;
        self.zip_write(other, &mut out.data, |a, b| a - b);
        Ok(out)
    }

    /// Write `self - other` into `result`.
    pub fn subtract_into(&self, other: &Matrix<T>, result: &mut Matrix<T>) -> Result<()> {
        validate::same_range("subtract", self.shape(), other.shape())?;
        validate::same_range("subtract", self.shape(), result.shape())?;
        self.zip_write(other, &mut result.data, |a, b| a - b);
        Ok(())
    }

    /// `self -= other`.
    pub fn subtract_in_place(&mut self, other: &Matrix<T>) -> Result<()> {
        validate::same_range("subtract", self.shape(), other.shape())?;
        self.zip_assign(other, |a, b| a - b);
        Ok(())
    }

    /// `other = self - other`, the result written into the right operand.
    pub fn subtract_into_right(&self, other: &mut Matrix<T>) -> Result<()> {
        validate::same_range("subtract", self.shape(), other.shape())?;
        self.zip_assign_right(other, |a, b| a - b);
        Ok(())
    }

    // ======================================================================
    // Negate
    // ======================================================================

    /// Element-wise negation.
    pub fn negate(&self) -> Matrix<T> {
        self.map(|x| -x)
    }

    /// Write `-self` into `result`, which must have the shape of `self`.
    pub fn negate_into(&self, result: &mut Matrix<T>) -> Result<()> {
        validate::same_shape("negate", self.shape(), result.shape())?;
        for (o, &a) in result.data.iter_mut().zip(&self.data) {
            *o = -a;
        }
        Ok(())
    }

    /// Negate `self`.
    pub fn negate_in_place(&mut self) {
        self.apply(|x| -x);
    }

    // ======================================================================
    // Pointwise multiply / divide
    // ======================================================================

    /// Element-wise (Hadamard) product.
    pub fn pointwise_multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        validate::same_shape("pointwise_multiply", self.shape(), other.shape())?;
        let mut out = Matrix::filled(self.rows, self.cols, T::zero())?;
        self.zip_write(other, &mut out.data, |a, b| a * b);
        Ok(out)
    }

    /// Write the element-wise product into `result`.
    pub fn pointwise_multiply_into(&self, other: &Matrix<T>, result: &mut Matrix<T>) -> Result<()> {
        validate::same_shape("pointwise_multiply", self.shape(), other.shape())?;
        validate::same_shape("pointwise_multiply", self.shape(), result.shape())?;
        self.zip_write(other, &mut result.data, |a, b| a * b);
        Ok(())
    }

    /// `self[i,j] *= other[i,j]`.
    pub fn pointwise_multiply_in_place(&mut self, other: &Matrix<T>) -> Result<()> {
        validate::same_shape("pointwise_multiply", self.shape(), other.shape())?;
        self.zip_assign(other, |a, b| a * b);
        Ok(())
    }

    /// Element-wise quotient `self[i,j] / other[i,j]`.
    ///
    /// Division by a zero element follows the scalar type's semantics
    /// (infinities / NaN for floats).
    pub fn pointwise_divide(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        validate::same_shape("pointwise_divide", self.shape(), other.shape())?;
        let mut out = Matrix::filled(self.rows, self.cols, T::zero())?;
        self.zip_write(other, &mut out.data, |a, b| a / b);
        Ok(out)
    }

    /// Write the element-wise quotient into `result`.
    pub fn pointwise_divide_into(&self, other: &Matrix<T>, result: &mut Matrix<T>) -> Result<()> {
        validate::same_shape("pointwise_divide", self.shape(), other.shape())?;
        validate::same_shape("pointwise_divide", self.shape(), result.shape())?;
        self.zip_write(other, &mut result.data, |a, b| a / b);
        Ok(())
    }

    /// `self[i,j] /= other[i,j]`.
    pub fn pointwise_divide_in_place(&mut self, other: &Matrix<T>) -> Result<()> {
        validate::same_shape("pointwise_divide", self.shape(), other.shape())?;
        self.zip_assign(other, |a, b| a / b);
        Ok(())
    }

    /// `other[i,j] = self[i,j] / other[i,j]`, the result written into the
    /// right operand.
    pub fn pointwise_divide_into_right(&self, other: &mut Matrix<T>) -> Result<()> {
        validate::same_shape("pointwise_divide", self.shape(), other.shape())?;
        self.zip_assign_right(other, |a, b| a / b);
        Ok(())
    }

    // ======================================================================
    // Reductions
    // ======================================================================

    /// Sum of the diagonal, accumulated in ascending index order.
    ///
    /// Returns [`CoreError::ShapeMismatch`](crate::CoreError::ShapeMismatch)
    /// for a non-square matrix.
    ///
    /// ```
    /// # use densela_core::Matrix;
    /// let m = Matrix::<f64>::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.trace().unwrap(), 5.0);
    /// ```
    pub fn trace(&self) -> Result<T> {
        validate::square("trace", self.shape())?;
        let n = self.rows;
        Ok((0..n).fold(T::zero(), |acc, i| acc + self.data[i * n + i]))
    }
}

// ======================================================================
// Infix wrappers
// ======================================================================

impl<T: Scalar> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        match Matrix::add(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Scalar> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        match Matrix::subtract(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scalar_multiply(rhs)
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.negate()
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(mut self) -> Matrix<T> {
        self.negate_in_place();
        self
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::CoreError;
    use num_complex::Complex64;

    fn m(rows: usize, cols: usize, data: &[f64]) -> Matrix<f64> {
        Matrix::from_vec(rows, cols, data.to_vec()).unwrap()
    }

    #[test]
    fn test_scalar_multiply_complex() {
        let a = Matrix::<Complex64>::from_fn(3, 3, |i, j| {
            Complex64::new(i as f64 + 0.5, j as f64 - 1.0)
        })
        .unwrap();
        let c = Complex64::new(2.2, 1.0);
        let r = a.scalar_multiply(c);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(r.get(i, j).unwrap(), a.get(i, j).unwrap() * c);
            }
        }
    }

    #[test]
    fn test_scalar_multiply_into_shape_mismatch_leaves_result() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let mut r = m(2, 3, &[9.0; 6]);
        let err = a.scalar_multiply_into(3.0, &mut r).unwrap_err();
        assert!(matches!(err, CoreError::ShapeMismatch { .. }));
        assert!(r.iter().all(|&x| x == 9.0));

        let mut ok = m(2, 2, &[0.0; 4]);
        a.scalar_multiply_into(3.0, &mut ok).unwrap();
        assert_eq!(ok.as_slice(), &[3.0, 6.0, 9.0, 12.0]);
    }

    #[test]
    fn test_add_subtract() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = m(2, 2, &[10.0, 20.0, 30.0, 40.0]);
        assert_eq!(a.add(&b).unwrap().as_slice(), &[11.0, 22.0, 33.0, 44.0]);
        assert_eq!(b.subtract(&a).unwrap().as_slice(), &[9.0, 18.0, 27.0, 36.0]);
    }

    #[test]
    fn test_add_mismatch_is_range_mismatch() {
        let a = m(2, 2, &[1.0; 4]);
        let rows_differ = m(3, 2, &[1.0; 6]);
        let cols_differ = m(2, 3, &[1.0; 6]);
        assert!(matches!(
            a.add(&rows_differ),
            Err(CoreError::RangeMismatch { op: "add", .. })
        ));
        assert!(matches!(
            a.subtract(&cols_differ),
            Err(CoreError::RangeMismatch { op: "subtract", .. })
        ));
    }

    #[test]
    fn test_add_into_validates_before_write() {
        let a = m(2, 2, &[1.0; 4]);
        let b = m(2, 2, &[2.0; 4]);
        let mut wrong = m(1, 4, &[7.0; 4]);
        assert!(a.add_into(&b, &mut wrong).is_err());
        assert!(wrong.iter().all(|&x| x == 7.0));

        let mut r = m(2, 2, &[0.0; 4]);
        a.subtract_into(&b, &mut r).unwrap();
        assert!(r.iter().all(|&x| x == -1.0));
    }

    #[test]
    fn test_add_in_place() {
        let mut a = m(1, 2, &[1.0, 2.0]);
        a.add_in_place(&m(1, 2, &[0.5, 0.5])).unwrap();
        assert_eq!(a.as_slice(), &[1.5, 2.5]);
        a.subtract_in_place(&m(1, 2, &[1.5, 2.5])).unwrap();
        assert_eq!(a.as_slice(), &[0.0, 0.0]);
        assert!(a.add_in_place(&m(2, 1, &[1.0, 1.0])).is_err());
    }

    #[test]
    fn test_right_operand_forms() {
        let a = m(2, 2, &[10.0, 20.0, 30.0, 40.0]);
        let b = m(2, 2, &[1.0, 2.0, 4.0, 8.0]);

        let mut diff = b.clone();
        a.subtract_into_right(&mut diff).unwrap();
        assert_eq!(diff, a.subtract(&b).unwrap());

        let mut quot = b.clone();
        a.pointwise_divide_into_right(&mut quot).unwrap();
        assert_eq!(quot, a.pointwise_divide(&b).unwrap());

        let mut wrong = m(1, 4, &[3.0; 4]);
        assert!(matches!(
            a.subtract_into_right(&mut wrong),
            Err(CoreError::RangeMismatch { .. })
        ));
        assert!(matches!(
            a.pointwise_divide_into_right(&mut wrong),
            Err(CoreError::ShapeMismatch { .. })
        ));
        assert!(wrong.iter().all(|&x| x == 3.0));
    }

    #[test]
    fn test_negate_involution() {
        let a = m(2, 3, &[1.0, -2.0, 3.0, 0.0, 5.5, -6.0]);
        assert_eq!(a.negate().negate(), a);
        let mut r = m(2, 3, &[0.0; 6]);
        a.negate_into(&mut r).unwrap();
        assert_eq!(r.as_slice(), &[-1.0, 2.0, -3.0, 0.0, -5.5, 6.0]);
        let mut bad = m(3, 2, &[0.0; 6]);
        assert!(matches!(
            a.negate_into(&mut bad),
            Err(CoreError::ShapeMismatch { op: "negate", .. })
        ));
    }

    #[test]
    fn test_pointwise() {
        let a = m(2, 2, &[2.0, 4.0, 6.0, 8.0]);
        let b = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.pointwise_multiply(&b).unwrap().as_slice(), &[2.0, 8.0, 18.0, 32.0]);
        assert_eq!(a.pointwise_divide(&b).unwrap().as_slice(), &[2.0, 2.0, 2.0, 2.0]);

        let mut r = m(2, 2, &[0.0; 4]);
        a.pointwise_divide_into(&b, &mut r).unwrap();
        assert_eq!(r.as_slice(), &[2.0; 4]);

        let mut c = a.clone();
        c.pointwise_multiply_in_place(&b).unwrap();
        c.pointwise_divide_in_place(&b).unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn test_pointwise_mismatch() {
        let a = m(2, 2, &[1.0; 4]);
        let b = m(2, 3, &[1.0; 6]);
        assert!(matches!(
            a.pointwise_multiply(&b),
            Err(CoreError::ShapeMismatch { .. })
        ));
        let mut r = m(3, 3, &[4.0; 9]);
        assert!(a.pointwise_multiply_into(&a, &mut r).is_err());
        assert!(r.iter().all(|&x| x == 4.0));
    }

    #[test]
    fn test_trace() {
        let a = m(3, 3, &[1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 3.5]);
        assert_eq!(a.trace().unwrap(), 6.5);
        let z = Matrix::from_vec(
            2,
            2,
            vec![
                Complex64::new(1.0, 1.0),
                Complex64::new(9.0, 9.0),
                Complex64::new(9.0, 9.0),
                Complex64::new(2.0, -3.0),
            ],
        )
        .unwrap();
        assert_eq!(z.trace().unwrap(), Complex64::new(3.0, -2.0));
    }

    #[test]
    fn test_trace_non_square() {
        let a = m(2, 3, &[1.0; 6]);
        assert!(matches!(
            a.trace(),
            Err(CoreError::ShapeMismatch { op: "trace", .. })
        ));
    }

    #[test]
    fn test_operators() {
        let a = m(1, 2, &[1.0, 2.0]);
        let b = m(1, 2, &[3.0, 5.0]);
        assert_eq!((&a + &b).as_slice(), &[4.0, 7.0]);
        assert_eq!((&b - &a).as_slice(), &[2.0, 3.0]);
        assert_eq!((&a * 2.0).as_slice(), &[2.0, 4.0]);
        assert_eq!((-&a).as_slice(), &[-1.0, -2.0]);
        assert_eq!((-a).as_slice(), &[-1.0, -2.0]);
    }

    #[test]
    #[should_panic(expected = "range mismatch")]
    fn test_add_operator_panics_on_mismatch() {
        let a = m(1, 2, &[1.0, 2.0]);
        let b = m(2, 1, &[1.0, 2.0]);
        let _ = &a + &b;
    }
}
