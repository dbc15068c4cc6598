//! Injectable sources of uniform and normal deviates.
//!
//! The data generator and the search draw every random number through the
//! [`Deviates`] trait, so tests can substitute a scripted source and callers
//! can share or fork streams explicitly. [`fastrand::Rng`] implements it out
//! of the box.
//!
//! # Examples
//!
//! ```
//! use sse_landscape::random::Deviates;
//!
//! let mut rng = fastrand::Rng::with_seed(42);
//! let u = rng.uniform(0.0, 10.0);
//! assert!((0.0..10.0).contains(&u));
//!
//! let noise = rng.normal_n(0.0, 0.3, 5);
//! assert_eq!(noise.len(), 5);
//! ```

use crate::rng_util;

/// A sequential, stateful source of pseudorandom deviates.
///
/// Each draw advances the stream; two sources created from the same seed
/// produce the same sequence.
pub trait Deviates {
    /// Draw a value uniformly from `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Draw a value from a normal distribution with the given mean and standard deviation.
    ///
    /// A standard deviation of zero returns `mean`.
    fn normal(&mut self, mean: f64, std: f64) -> f64;

    /// Draw `n` independent normal deviates, in stream order.
    fn normal_n(&mut self, mean: f64, std: f64, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.normal(mean, std)).collect()
    }

    /// Draw `n` independent uniform deviates from `[low, high)`, in stream order.
    fn uniform_n(&mut self, low: f64, high: f64, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.uniform(low, high)).collect()
    }
}

impl Deviates for fastrand::Rng {
    #[inline]
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        rng_util::f64_range(self, low, high)
    }

    fn normal(&mut self, mean: f64, std: f64) -> f64 {
        mean + std * rng_util::standard_normal(self)
    }
}

impl<D: Deviates + ?Sized> Deviates for &mut D {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }

    fn normal(&mut self, mean: f64, std: f64) -> f64 {
        (**self).normal(mean, std)
    }
}

/// Create a seeded stream, or an entropy-seeded one when `seed` is `None`.
pub(crate) fn make_rng(seed: Option<u64>) -> fastrand::Rng {
    seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed)
}
