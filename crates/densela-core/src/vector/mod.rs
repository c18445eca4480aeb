//! Dense vector type.
//!
//! A [`Vector`] is a fixed-length, non-empty sequence of scalars. Like
//! [`Matrix`](crate::Matrix) its length never changes after construction.

use core::fmt;

use crate::error::{CoreError, Result};
use crate::random::ScalarSource;
use crate::{Real, Scalar, validate};

/// A dense vector of `len` scalars.
#[derive(Debug, Clone)]
pub struct Vector<T: Scalar> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a vector of `len` zeros.
    pub fn zeros(len: usize) -> Result<Self> {
        validate::positive_dims(&[len])?;
        Self::filled(len, T::zero())
    }

    /// Create a vector from its elements.
    ///
    /// Returns [`CoreError::InvalidParameter`] for an empty `data`.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        validate::positive_dims(&[data.len()])?;
        Ok(Self { data })
    }

    /// Create a vector from a slice (copies the data).
    pub fn from_slice(data: &[T]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    /// Create a vector whose element `i` is `generator(i)`.
    pub fn from_fn<F>(len: usize, generator: F) -> Result<Self>
    where
        F: FnMut(usize) -> T,
    {
        validate::positive_dims(&[len])?;
        validate::element_count::<T>(len, 1)?;
        Ok(Self {
            data: (0..len).map(generator).collect(),
        })
    }

    /// Create a vector whose elements are drawn from `source`.
    pub fn random<S>(len: usize, source: &mut S) -> Result<Self>
    where
        S: ScalarSource + ?Sized,
    {
        validate::positive_dims(&[len])?;
        validate::element_count::<T>(len, 1)?;
        let data = (0..len)
            .map(|_| T::from_uniform(|| source.next_scalar()))
            .collect();
        Ok(Self { data })
    }

    pub(crate) fn filled(len: usize, value: T) -> Result<Self> {
        let len = validate::element_count::<T>(len, 1)?;
        Ok(Self {
            data: vec![value; len],
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a vector holds at least one element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The elements as a mutable slice. Its length is fixed.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.data.len() {
            return Err(CoreError::IndexOutOfBounds {
                index: vec![i],
                shape: vec![self.data.len()],
            });
        }
        Ok(())
    }

    /// The element at index `i`.
    pub fn get(&self, i: usize) -> Result<T> {
        self.check_index(i)?;
        Ok(self.data[i])
    }

    /// Overwrite the element at index `i`.
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        self.check_index(i)?;
        self.data[i] = value;
        Ok(())
    }

    /// Copy every element of `other` into `self`.
    pub fn copy_from(&mut self, other: &Vector<T>) -> Result<()> {
        validate::vector_len("copy_from", self.len(), other.len())?;
        self.data.copy_from_slice(&other.data);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Products and norms
    // ------------------------------------------------------------------

    /// Bilinear dot product `sum(x_k * y_k)`, without conjugation.
    ///
    /// ```
    /// # use densela_core::Vector;
    /// let x = Vector::<f64>::from_vec(vec![1.0, 2.0, 3.0]).unwrap();
    /// let y = Vector::from_vec(vec![4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(x.dot(&y).unwrap(), 32.0);
    /// ```
    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        validate::vector_len("dot", self.len(), other.len())?;
        Ok(dot_slices(&self.data, &other.data))
    }

    /// Inner product `sum(conj(x_k) * y_k)`.
    pub fn hermitian_dot(&self, other: &Vector<T>) -> Result<T> {
        validate::vector_len("hermitian_dot", self.len(), other.len())?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (&a, &b)| acc + a.conj() * b))
    }

    /// The p-norm `(sum |x_k|^p)^(1/p)`.
    ///
    /// `p = +inf` gives the maximum magnitude. Returns
    /// [`CoreError::InvalidParameter`] if `p < 1`.
    pub fn norm_p(&self, p: T::Real) -> Result<T::Real> {
        validate::norm_order(p)?;
        Ok(p_norm(self.data.iter().copied(), p))
    }

    /// Euclidean norm.
    pub fn norm(&self) -> T::Real {
        p_norm(self.data.iter().copied(), T::Real::from_f64(2.0))
    }

    /// A copy divided by its p-norm. A zero vector is returned unchanged.
    pub fn normalize(&self, p: T::Real) -> Result<Vector<T>> {
        let norm = self.norm_p(p)?;
        if norm == T::Real::zero() {
            return Ok(self.clone());
        }
        Ok(self.map(|x| x / T::from_real(norm)))
    }

    // ------------------------------------------------------------------
    // Element-wise arithmetic
    // ------------------------------------------------------------------

    /// Apply a function to every element, returning a new vector.
    pub fn map<F>(&self, f: F) -> Vector<T>
    where
        F: Fn(T) -> T,
    {
        Vector {
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    /// Element-wise sum. Length mismatch is a
    /// [`CoreError::RangeMismatch`].
    pub fn add(&self, other: &Vector<T>) -> Result<Vector<T>> {
        validate::same_len_range("add", self.len(), other.len())?;
        Ok(Vector {
            data: self.data.iter().zip(&other.data).map(|(&a, &b)| a + b).collect(),
        })
    }

    /// Element-wise difference. Length mismatch is a
    /// [`CoreError::RangeMismatch`].
    pub fn subtract(&self, other: &Vector<T>) -> Result<Vector<T>> {
        validate::same_len_range("subtract", self.len(), other.len())?;
        Ok(Vector {
            data: self.data.iter().zip(&other.data).map(|(&a, &b)| a - b).collect(),
        })
    }

    /// `s * x_k` for every element.
    pub fn scalar_multiply(&self, s: T) -> Vector<T> {
        self.map(|x| x * s)
    }

    /// Element-wise negation.
    pub fn negate(&self) -> Vector<T> {
        self.map(|x| -x)
    }

    /// Element-wise complex conjugate.
    pub fn conjugate(&self) -> Vector<T> {
        self.map(T::conj)
    }
}

impl<T: Scalar> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vector([")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "])")
    }
}

// ======================================================================
// Shared kernels
// ======================================================================

/// `sum(a_k * b_k)` over two equally long slices.
#[inline]
pub(crate) fn dot_slices<T: Scalar>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

/// p-norm of a sequence of scalars; `p` is assumed already validated.
pub(crate) fn p_norm<T, I>(values: I, p: T::Real) -> T::Real
where
    T: Scalar,
    I: Iterator<Item = T>,
{
    let zero = T::Real::zero();
    let one = T::Real::one();
    if p == T::Real::infinity() {
        return values.fold(zero, |acc, x| acc.max(x.abs()));
    }
    if p == one {
        return values.fold(zero, |acc, x| acc + x.abs());
    }
    if p == T::Real::from_f64(2.0) {
        return values.fold(zero, |acc, x| acc.hypot(x.abs()));
    }
    values
        .fold(zero, |acc, x| acc + x.abs().powf(p))
        .powf(p.recip())
}
