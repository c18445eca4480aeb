//! Scalar sources for random matrix and vector construction.
//!
//! The engine only needs one capability from a random source: "produce the
//! next value in `[0, 1)`". That capability is the [`ScalarSource`] trait.
//! Two sources ship with the crate:
//!
//! - [`Rng`], a seedable xoshiro256\*\* generator with explicit state,
//! - [`RandSource`], an adapter over any [`rand::RngCore`] generator.
//!
//! Seeding uses `SplitMix64` to expand a single `u64` into the 4-word
//! xoshiro256\*\* state (avoids the zero-state trap).

use rand::RngCore;

/// A source of raw uniform draws in `[0, 1)`.
pub trait ScalarSource {
    /// The next draw, uniformly distributed in `[0, 1)`.
    fn next_scalar(&mut self) -> f64;
}

impl<S: ScalarSource + ?Sized> ScalarSource for &mut S {
    #[inline]
    fn next_scalar(&mut self) -> f64 {
        (**self).next_scalar()
    }
}

/// Map the upper 53 bits of a `u64` onto `[0, 1)`.
#[inline]
fn unit_f64(bits: u64) -> f64 {
    (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

// ---------------------------------------------------------------------------
// SplitMix64, used only for seeding
// ---------------------------------------------------------------------------

#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

// ---------------------------------------------------------------------------
// Rng: xoshiro256**
// ---------------------------------------------------------------------------

/// A fast, reproducible pseudo-random generator (xoshiro256\*\*).
///
/// ```
/// use densela_core::random::{Rng, ScalarSource};
///
/// let mut rng = Rng::new(42);
/// let value = rng.next_scalar();
/// assert!((0.0..1.0).contains(&value));
/// ```
#[derive(Debug, Clone)]
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    /// Create a generator seeded from a single `u64`.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: core::array::from_fn(|_| splitmix64(&mut sm)),
        }
    }

    /// Re-seed the generator, discarding all previous state.
    pub fn seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Generate the next random `u64`.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }
}

impl ScalarSource for Rng {
    #[inline]
    fn next_scalar(&mut self) -> f64 {
        unit_f64(self.next_u64())
    }
}

// ---------------------------------------------------------------------------
// RandSource: adapter over the `rand` ecosystem
// ---------------------------------------------------------------------------

/// Wrap any [`rand::RngCore`] generator as a [`ScalarSource`].
///
/// ```
/// use densela_core::Matrix;
/// use densela_core::random::RandSource;
/// use rand::SeedableRng;
///
/// let mut source = RandSource::new(rand::rngs::StdRng::seed_from_u64(3));
/// let m = Matrix::<f64>::random(2, 2, &mut source).unwrap();
/// assert_eq!(m.shape(), (2, 2));
/// ```
#[derive(Debug, Clone)]
pub struct RandSource<R: RngCore> {
    inner: R,
}

impl<R: RngCore> RandSource<R> {
    /// Draw scalars from `inner`.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: RngCore> ScalarSource for RandSource<R> {
    #[inline]
    fn next_scalar(&mut self) -> f64 {
        unit_f64(self.inner.next_u64())
    }
}
