//! Scalar field abstraction for generic matrix arithmetic.
//!
//! The trait hierarchy is:
//! ```text
//! Scalar            (f32, f64, Complex<f32>, Complex<f64>)
//!   └── Real        (f32, f64)
//! ```
//!
//! Every engine routine is written once against [`Scalar`]; the real and
//! complex instantiations share identical algebraic semantics. [`Real`] is the
//! type a scalar's magnitude lives in and carries the transcendental
//! operations that norms need.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_complex::Complex;

// ---------------------------------------------------------------------------
// Scalar: the field every matrix element belongs to
// ---------------------------------------------------------------------------

/// A field-like element type storable in a [`Matrix`](crate::Matrix) or
/// [`Vector`](crate::Vector).
///
/// Arithmetic (`+ - * /`, negation) comes from the operator supertraits; the
/// remaining field operations are the methods below.
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + Send
    + Sync
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// The real type magnitudes are measured in.
    type Real: Real;

    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;

    /// Complex conjugate. The identity for real scalars.
    fn conj(self) -> Self;

    /// Absolute value for reals, magnitude for complex numbers.
    fn abs(self) -> Self::Real;

    /// Embed a real value (imaginary part zero).
    fn from_real(re: Self::Real) -> Self;

    /// Convert from an `f64` literal (used for constants).
    fn from_f64(v: f64) -> Self;

    /// Convert from `usize` (used for index arithmetic in generators).
    fn from_usize(v: usize) -> Self;

    /// Build a value from uniform draws in `[0, 1)`.
    ///
    /// Reals consume one draw; complex scalars consume two (real part first).
    fn from_uniform<F: FnMut() -> f64>(draw: F) -> Self;

    /// Whether every component is finite.
    fn is_finite(self) -> bool;
}

// ---------------------------------------------------------------------------
// Real
// ---------------------------------------------------------------------------

/// Real-valued scalars (`f32`, `f64`): ordered, and closed under the
/// operations p-norms need.
pub trait Real: Scalar<Real = Self> + PartialOrd {
    /// Positive infinity.
    fn infinity() -> Self;

    /// Not-a-number.
    fn nan() -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// `self` raised to the real power `n`.
    fn powf(self, n: Self) -> Self;

    /// `1 / self`.
    fn recip(self) -> Self;

    /// Whether the value is NaN.
    fn is_nan(self) -> bool;

    /// The larger of two values, ignoring a NaN operand.
    fn max(self, other: Self) -> Self;

    /// `sqrt(self^2 + other^2)` without undue overflow.
    fn hypot(self, other: Self) -> Self;
}

// ===========================================================================
// Macro implementations
// ===========================================================================

macro_rules! impl_real {
    ($ty:ty) => {
        impl Scalar for $ty {
            type Real = $ty;

            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            #[inline]
            fn conj(self) -> Self {
                self
            }
            #[inline]
            fn abs(self) -> $ty {
                <$ty>::abs(self)
            }
            #[inline]
            fn from_real(re: $ty) -> Self {
                re
            }
            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
            #[inline]
            fn from_usize(v: usize) -> Self {
                v as Self
            }
            #[inline]
            fn from_uniform<F: FnMut() -> f64>(mut draw: F) -> Self {
                // Narrowing may round a draw just below one up to one.
                <$ty>::min(Self::from_f64(draw()), 1.0 - <$ty>::EPSILON / 2.0)
            }
            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }
        }

        impl Real for $ty {
            #[inline]
            fn infinity() -> Self {
                <$ty>::INFINITY
            }
            #[inline]
            fn nan() -> Self {
                <$ty>::NAN
            }
            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }
            #[inline]
            fn powf(self, n: Self) -> Self {
                <$ty>::powf(self, n)
            }
            #[inline]
            fn recip(self) -> Self {
                <$ty>::recip(self)
            }
            #[inline]
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }
            #[inline]
            fn max(self, other: Self) -> Self {
                <$ty>::max(self, other)
            }
            #[inline]
            fn hypot(self, other: Self) -> Self {
                <$ty>::hypot(self, other)
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);

macro_rules! impl_complex {
    ($ty:ty) => {
        impl Scalar for Complex<$ty> {
            type Real = $ty;

            #[inline]
            fn zero() -> Self {
                Complex::new(0.0, 0.0)
            }
            #[inline]
            fn one() -> Self {
                Complex::new(1.0, 0.0)
            }
            #[inline]
            fn conj(self) -> Self {
                Complex::new(self.re, -self.im)
            }
            #[inline]
            fn abs(self) -> $ty {
                <$ty>::hypot(self.re, self.im)
            }
            #[inline]
            fn from_real(re: $ty) -> Self {
                Complex::new(re, 0.0)
            }
            #[inline]
            fn from_f64(v: f64) -> Self {
                Complex::new(<$ty as Scalar>::from_f64(v), 0.0)
            }
            #[inline]
            fn from_usize(v: usize) -> Self {
                Complex::new(<$ty as Scalar>::from_usize(v), 0.0)
            }
            #[inline]
            fn from_uniform<F: FnMut() -> f64>(mut draw: F) -> Self {
                let re = <$ty as Scalar>::from_uniform(&mut draw);
                let im = <$ty as Scalar>::from_uniform(&mut draw);
                Complex::new(re, im)
            }
            #[inline]
            fn is_finite(self) -> bool {
                self.re.is_finite() && self.im.is_finite()
            }
        }
    };
}

impl_complex!(f32);
impl_complex!(f64);
